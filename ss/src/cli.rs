//! CLI argument parsing for secretsanta

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ss")]
#[command(author, version, about = "Secret Santa assignment system", long_about = None)]
pub struct Cli {
    /// Path to input CSV file with employee information
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to CSV file with previous year's assignments
    #[arg(short, long)]
    pub previous: Option<PathBuf>,

    /// Path where to save the output CSV file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed the draw for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,

    /// Attempts before giving up (default: 100)
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Print the assignments after saving them
    #[arg(long)]
    pub show: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
