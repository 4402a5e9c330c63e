//! CSV reading and writing
//!
//! Files are read into a loosely typed [`Table`] so the validator can report
//! on missing columns before any rows are interpreted. Results are written
//! straight from [`Assignments`].

use csv::{ReaderBuilder, Trim, Writer};
use log::debug;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::ColumnConfig;
use crate::domain::Assignments;
use crate::error::InputFileError;

/// A header row plus string cells, as read from a CSV file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a CSV file with a header row
    pub fn read(path: impl AsRef<Path>) -> Result<Self, InputFileError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InputFileError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(file, path)?;
        debug!("Read {} rows from {}", table.rows.len(), path.display());
        Ok(table)
    }

    /// Read CSV from any reader, e.g. an uploaded buffer
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputFileError> {
        Self::parse(reader, Path::new("<input>"))
    }

    fn parse<R: Read>(reader: R, path: &Path) -> Result<Self, InputFileError> {
        let read_err = |source| InputFileError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers: Vec<String> = reader.headers().map_err(read_err)?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(InputFileError::Empty {
                path: path.to_path_buf(),
            });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(read_err)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Index of the named column, if present
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Write assignments to a CSV file at `path`
pub fn write_assignments(
    assignments: &Assignments,
    columns: &ColumnConfig,
    path: impl AsRef<Path>,
) -> Result<(), InputFileError> {
    let path = path.as_ref();
    let write_err = |source| InputFileError::Write {
        path: PathBuf::from(path),
        source,
    };

    let file = File::create(path).map_err(|e| write_err(e.into()))?;
    write_assignments_to(assignments, columns, file).map_err(write_err)?;
    debug!("Wrote {} assignments to {}", assignments.len(), path.display());
    Ok(())
}

/// Write assignments as CSV to any writer
pub fn write_assignments_to<W: Write>(
    assignments: &Assignments,
    columns: &ColumnConfig,
    writer: W,
) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(columns.assignment_headers())?;
    for edge in assignments {
        writer.write_record([
            edge.giver.name.as_str(),
            edge.giver.id.as_str(),
            edge.receiver.name.as_str(),
            edge.receiver.id.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
