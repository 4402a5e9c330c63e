use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use secretsanta::cli::Cli;
use secretsanta::config::Config;
use secretsanta::{Assignments, SecretSantaError};

/// Exit status for validation, assignment and file errors
const EXIT_KNOWN_ERROR: u8 = 1;
/// Exit status for anything else
const EXIT_UNEXPECTED_ERROR: u8 = 2;

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }

    info!("secretsanta starting (max_attempts: {})", config.max_attempts);

    let assignments = secretsanta::run(&config, &cli.input, cli.previous.as_deref(), &cli.output)?;

    if cli.show {
        print_assignments(&assignments);
    }
    println!(
        "{} Successfully generated {} Secret Santa assignments and saved to {}",
        "✓".green(),
        assignments.len(),
        cli.output.display().to_string().cyan()
    );
    Ok(())
}

fn print_assignments(assignments: &Assignments) {
    for edge in assignments {
        println!(
            "{} {} {} {} {}",
            edge.giver.name.bold(),
            format!("<{}>", edge.giver.id).dimmed(),
            "→".green(),
            edge.receiver.name.bold(),
            format!("<{}>", edge.receiver.id).dimmed()
        );
    }
    println!();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => match report.downcast_ref::<SecretSantaError>() {
            Some(err) => {
                eprintln!("{} {}", "Error:".red(), err);
                ExitCode::from(EXIT_KNOWN_ERROR)
            }
            None => {
                eprintln!("{} {:#}", "Unexpected error:".red(), report);
                ExitCode::from(EXIT_UNEXPECTED_ERROR)
            }
        },
    }
}
