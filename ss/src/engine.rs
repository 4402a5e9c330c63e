//! Randomized assignment search
//!
//! Each attempt walks the givers in a fresh random order and hands each one a
//! random receiver from whoever is still unclaimed, skipping the giver
//! themselves and last year's receiver. A giver left with no candidates kills
//! the attempt; there is no backtracking. The first attempt that gets through
//! every giver is returned.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;

use crate::domain::{Assignments, History, Participant};
use crate::error::AssignmentError;

/// Draws assignments with a bounded number of attempts
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    max_attempts: usize,
    rng: StdRng,
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new(crate::MAX_ATTEMPTS)
    }
}

impl AssignmentEngine {
    /// Engine seeded from the thread RNG
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Engine that produces the same draws for the same seed and input
    pub fn seeded(max_attempts: usize, seed: u64) -> Self {
        Self {
            max_attempts,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Produce a full set of assignments, or fail once the attempt budget is spent
    pub fn generate(
        &mut self,
        participants: &[Participant],
        history: Option<&History>,
    ) -> Result<Assignments, AssignmentError> {
        if participants.is_empty() {
            return Err(AssignmentError::NoParticipants);
        }

        for attempt in 1..=self.max_attempts {
            match self.attempt(participants, history) {
                Ok(assignments) => {
                    info!(
                        "Generated {} assignments on attempt {}/{}",
                        assignments.len(),
                        attempt,
                        self.max_attempts
                    );
                    return Ok(assignments);
                }
                Err(e) => debug!("Attempt {} failed: {}", attempt, e),
            }
        }

        warn!(
            "No valid assignment for {} participants after {} attempts",
            participants.len(),
            self.max_attempts
        );
        Err(AssignmentError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    fn attempt(
        &mut self,
        participants: &[Participant],
        history: Option<&History>,
    ) -> Result<Assignments, AssignmentError> {
        let mut givers: Vec<&Participant> = participants.iter().collect();
        givers.shuffle(&mut self.rng);

        let mut available: Vec<&Participant> = participants.iter().collect();
        let mut assignments = Assignments::with_capacity(participants.len());

        for giver in givers {
            let previous = history.and_then(|h| h.previous_receiver(&giver.id));
            let candidates: Vec<usize> = available
                .iter()
                .enumerate()
                .filter(|(_, receiver)| receiver.id != giver.id && Some(receiver.id.as_str()) != previous)
                .map(|(idx, _)| idx)
                .collect();

            let Some(&pick) = candidates.choose(&mut self.rng) else {
                return Err(AssignmentError::NoValidReceiver {
                    giver: giver.id.clone(),
                });
            };

            // Receivers are unordered, so swap_remove is fine
            let receiver = available.swap_remove(pick);
            assignments.push(giver.clone(), receiver.clone());
        }

        Ok(assignments)
    }
}

/// Generate assignments with the default attempt budget and a random seed
pub fn generate_assignments(
    participants: &[Participant],
    history: Option<&History>,
) -> Result<Assignments, AssignmentError> {
    AssignmentEngine::default().generate(participants, history)
}
