//! SecretSanta - gift exchange assignments
//!
//! Gives every participant exactly one other participant to buy for. Nobody
//! draws themselves, and when last year's draw is supplied nobody draws the
//! same person twice in a row.
//!
//! # Flow
//!
//! ```text
//! participants.csv ─▶ Table ─▶ validate_participants ─┐
//!                                                       ├─▶ AssignmentEngine ─▶ write_assignments
//! previous.csv ─────▶ Table ─▶ validate_history ───────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use secretsanta::{ColumnConfig, Table, generate_assignments, validate_participants, write_assignments};
//!
//! let columns = ColumnConfig::default();
//! let participants = validate_participants(&Table::read("employees.csv")?, &columns)?;
//! let assignments = generate_assignments(&participants, None)?;
//! write_assignments(&assignments, &columns, "assignments.csv")?;
//! ```

use std::path::Path;

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod table;
pub mod validate;

pub use config::{ColumnConfig, Config};
pub use domain::{AssignmentEdge, Assignments, History, HistoryRecord, Participant};
pub use engine::{AssignmentEngine, generate_assignments};
pub use error::{AssignmentError, InputFileError, SecretSantaError, ValidationError};
pub use table::{Table, write_assignments, write_assignments_to};
pub use validate::{validate_history, validate_participants};

/// Attempts made before the engine gives up
pub const MAX_ATTEMPTS: usize = 100;

/// Load, validate, draw and write in one go
///
/// This is the whole batch run behind the `ss` binary.
pub fn run(config: &Config, input: &Path, previous: Option<&Path>, output: &Path) -> error::Result<Assignments> {
    let participants = validate_participants(&Table::read(input)?, &config.columns)?;

    let history = match previous {
        Some(path) => Some(validate_history(&Table::read(path)?, &config.columns)?),
        None => None,
    };

    let mut engine = match config.seed {
        Some(seed) => AssignmentEngine::seeded(config.max_attempts, seed),
        None => AssignmentEngine::new(config.max_attempts),
    };
    let assignments = engine.generate(&participants, history.as_ref())?;

    write_assignments(&assignments, &config.columns, output)?;
    Ok(assignments)
}
