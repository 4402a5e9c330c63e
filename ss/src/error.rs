//! Error types for secretsanta
//!
//! Every failure the library can report belongs to the [`SecretSantaError`]
//! family. The binary treats these as "known" failures and anything else as
//! unexpected.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing a tabular file
#[derive(Debug, Error)]
pub enum InputFileError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is empty, expected a header row")]
    Empty { path: PathBuf },
}

/// Structural problems with participant or history data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{table} missing required columns: {}", columns.join(", "))]
    MissingColumns { table: String, columns: Vec<String> },

    #[error("Duplicate email ID found in participant data: {id}")]
    DuplicateIdentifier { id: String },

    #[error("{table} row {row} has an empty email ID")]
    EmptyIdentifier { table: String, row: usize },
}

/// Failures of the assignment search
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("No participant data loaded")]
    NoParticipants,

    #[error("No valid children available for assignment to {giver}")]
    NoValidReceiver { giver: String },

    #[error("Could not generate valid assignments after maximum attempts ({attempts})")]
    AttemptsExhausted { attempts: usize },
}

/// Umbrella for all known failures
#[derive(Debug, Error)]
pub enum SecretSantaError {
    #[error(transparent)]
    InputFile(#[from] InputFileError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}

pub type Result<T, E = SecretSantaError> = std::result::Result<T, E>;
