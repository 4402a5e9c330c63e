//! Typed records flowing through validation and the engine

use log::debug;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A member of the gift exchange
///
/// `id` (an email address) is the key for equality and lookup; `name` is only
/// carried along for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One giver -> receiver pair from a previous round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub giver_id: String,
    pub giver_name: String,
    pub receiver_id: String,
    pub receiver_name: String,
}

/// Previous round's assignments, indexed by giver
///
/// If a giver appears more than once, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<HistoryRecord>,
    by_giver: HashMap<String, usize>,
}

impl History {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        let mut by_giver = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            match by_giver.entry(record.giver_id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
                Entry::Occupied(_) => {
                    debug!("Ignoring repeated history record for giver {}", record.giver_id);
                }
            }
        }
        Self { records, by_giver }
    }

    /// Receiver id the giver had last time, if any
    pub fn previous_receiver(&self, giver_id: &str) -> Option<&str> {
        self.by_giver
            .get(giver_id)
            .map(|&idx| self.records[idx].receiver_id.as_str())
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A single new assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentEdge {
    pub giver: Participant,
    pub receiver: Participant,
}

/// A complete set of assignments, in the order they were made
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    edges: Vec<AssignmentEdge>,
}

impl Assignments {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, giver: Participant, receiver: Participant) {
        self.edges.push(AssignmentEdge { giver, receiver });
    }

    /// Look up who `giver_id` was assigned
    pub fn receiver_of(&self, giver_id: &str) -> Option<&Participant> {
        self.edges
            .iter()
            .find(|edge| edge.giver.id == giver_id)
            .map(|edge| &edge.receiver)
    }

    pub fn edges(&self) -> &[AssignmentEdge] {
        &self.edges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentEdge> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Re-read the assignments as history for the next round
    pub fn to_history(&self) -> History {
        History::new(
            self.edges
                .iter()
                .map(|edge| HistoryRecord {
                    giver_id: edge.giver.id.clone(),
                    giver_name: edge.giver.name.clone(),
                    receiver_id: edge.receiver.id.clone(),
                    receiver_name: edge.receiver.name.clone(),
                })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = &'a AssignmentEdge;
    type IntoIter = std::slice::Iter<'a, AssignmentEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(giver: &str, receiver: &str) -> HistoryRecord {
        HistoryRecord {
            giver_id: giver.to_string(),
            giver_name: giver.to_uppercase(),
            receiver_id: receiver.to_string(),
            receiver_name: receiver.to_uppercase(),
        }
    }

    #[test]
    fn test_previous_receiver_lookup() {
        let history = History::new(vec![record("a", "b"), record("b", "c")]);

        assert_eq!(history.previous_receiver("a"), Some("b"));
        assert_eq!(history.previous_receiver("b"), Some("c"));
        assert_eq!(history.previous_receiver("gone@acme.com"), None);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_first_history_record_wins() {
        let history = History::new(vec![record("a", "b"), record("a", "c")]);

        assert_eq!(history.previous_receiver("a"), Some("b"));
        // Both records are kept, only the lookup is first-match
        assert_eq!(history.records().len(), 2);
    }

    #[test]
    fn test_assignments_to_history() {
        let mut assignments = Assignments::with_capacity(2);
        assignments.push(Participant::new("a", "Ann"), Participant::new("b", "Bob"));
        assignments.push(Participant::new("b", "Bob"), Participant::new("a", "Ann"));

        assert_eq!(assignments.receiver_of("a").map(|p| p.name.as_str()), Some("Bob"));

        let history = assignments.to_history();
        assert_eq!(history.previous_receiver("b"), Some("a"));
        assert_eq!(history.records()[0].receiver_name, "Bob");
    }
}
