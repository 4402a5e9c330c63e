//! Configuration for secretsanta

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Column headers used in the CSV files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Giver display name (also the participant name column)
    pub giver_name: String,

    /// Giver email ID (also the participant ID column)
    pub giver_id: String,

    /// Receiver display name
    pub receiver_name: String,

    /// Receiver email ID
    pub receiver_id: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            giver_name: "Employee_Name".to_string(),
            giver_id: "Employee_EmailID".to_string(),
            receiver_name: "Secret_Child_Name".to_string(),
            receiver_id: "Secret_Child_EmailID".to_string(),
        }
    }
}

impl ColumnConfig {
    /// Headers required in the participant file
    pub fn participant_headers(&self) -> [&str; 2] {
        [self.giver_name.as_str(), self.giver_id.as_str()]
    }

    /// Headers required in the history file, in output order
    pub fn assignment_headers(&self) -> [&str; 4] {
        [
            self.giver_name.as_str(),
            self.giver_id.as_str(),
            self.receiver_name.as_str(),
            self.receiver_id.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of randomized attempts before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Fixed RNG seed for reproducible draws
    #[serde(default)]
    pub seed: Option<u64>,

    /// CSV column names
    #[serde(default)]
    pub columns: ColumnConfig,
}

fn default_max_attempts() -> usize {
    crate::MAX_ATTEMPTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            seed: None,
            columns: ColumnConfig::default(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            Some(PathBuf::from("secretsanta.yml")),
            dirs::config_dir().map(|p| p.join("secretsanta").join("config.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
            }
        }

        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
