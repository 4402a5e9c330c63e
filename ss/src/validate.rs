//! Structural checks on participant and history tables
//!
//! Validation runs once per load and turns a raw [`Table`] into typed records.
//! The engine assumes whatever comes out of here is well formed.

use log::debug;
use std::collections::HashSet;

use crate::config::ColumnConfig;
use crate::domain::{History, HistoryRecord, Participant};
use crate::error::ValidationError;
use crate::table::Table;

const PARTICIPANT_TABLE: &str = "Employee data";
const HISTORY_TABLE: &str = "Previous assignments";

/// Look up each required column, reporting every missing one at once
fn require_columns<const N: usize>(
    table: &Table,
    required: [&str; N],
    label: &str,
) -> Result<[usize; N], ValidationError> {
    let mut indices = [0; N];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(required) {
        match table.column(name) {
            Some(idx) => *slot = idx,
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(ValidationError::MissingColumns {
            table: label.to_string(),
            columns: missing,
        })
    }
}

/// Check the participant table and build the roster
///
/// Fails if either column is missing, an ID is blank, or two rows share an ID.
pub fn validate_participants(table: &Table, columns: &ColumnConfig) -> Result<Vec<Participant>, ValidationError> {
    let [name_idx, id_idx] = require_columns(table, columns.participant_headers(), PARTICIPANT_TABLE)?;

    let mut seen = HashSet::with_capacity(table.rows.len());
    let mut participants = Vec::with_capacity(table.rows.len());

    for (row_num, row) in table.rows.iter().enumerate() {
        let id = row[id_idx].as_str();
        if id.is_empty() {
            return Err(ValidationError::EmptyIdentifier {
                table: PARTICIPANT_TABLE.to_string(),
                row: row_num + 1,
            });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateIdentifier { id: id.to_string() });
        }
        participants.push(Participant::new(id, row[name_idx].as_str()));
    }

    debug!("Validated {} participants", participants.len());
    Ok(participants)
}

/// Check the history table and index it by giver
///
/// Only the columns are checked. Repeated givers and IDs that are no longer
/// on the roster are accepted.
pub fn validate_history(table: &Table, columns: &ColumnConfig) -> Result<History, ValidationError> {
    let [giver_name, giver_id, receiver_name, receiver_id] =
        require_columns(table, columns.assignment_headers(), HISTORY_TABLE)?;

    let records: Vec<HistoryRecord> = table
        .rows
        .iter()
        .map(|row| HistoryRecord {
            giver_id: row[giver_id].clone(),
            giver_name: row[giver_name].clone(),
            receiver_id: row[receiver_id].clone(),
            receiver_name: row[receiver_name].clone(),
        })
        .collect();

    debug!("Validated {} history records", records.len());
    Ok(History::new(records))
}
