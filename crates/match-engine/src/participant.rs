//! Participants and the ingestion of raw availability slots.
//!
//! Collaborators submit one `(participant_id, start, end)` tuple per
//! availability window. [`group_slots`] normalizes each tuple and folds the
//! windows of one participant together, preserving submission order.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::interval::{clock, Interval};

/// The partition a participant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Recruiter,
    Candidate,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Recruiter => f.write_str("recruiter"),
            Role::Candidate => f.write_str("candidate"),
        }
    }
}

/// One submitted availability window, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub participant_id: String,
    #[serde(with = "clock")]
    pub start: NaiveTime,
    #[serde(with = "clock")]
    pub end: NaiveTime,
}

impl AvailabilitySlot {
    pub fn new(participant_id: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            participant_id: participant_id.into(),
            start,
            end,
        }
    }

    pub fn normalize(&self) -> Result<Interval> {
        Interval::normalize(self.start, self.end)
    }
}

/// A recruiter or candidate with their normalized availability.
///
/// The id is opaque (usually an email address) and is not required to be
/// unique; graph nodes are keyed by position, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub id: String,
    pub role: Role,
    pub intervals: Vec<Interval>,
}

impl Participant {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            intervals: Vec::new(),
        }
    }

    pub fn recruiter(id: impl Into<String>) -> Self {
        Self::new(id, Role::Recruiter)
    }

    pub fn candidate(id: impl Into<String>) -> Self {
        Self::new(id, Role::Candidate)
    }

    /// Builder-style helper to append an availability window.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.intervals.push(interval);
        self
    }

    /// True when at least one window of `self` overlaps one window of `other`.
    pub fn shares_availability_with(&self, other: &Participant) -> bool {
        self.intervals
            .iter()
            .any(|mine| other.intervals.iter().any(|theirs| mine.overlaps(theirs)))
    }
}

/// Normalize raw slots and fold them into participants of the given role.
///
/// Participants appear in order of their first slot; each participant's
/// intervals keep submission order.
///
/// # Errors
/// Returns `MatchError::InvalidSlot` wrapping the normalization failure of the
/// first slot that cannot be admitted (e.g. a zero-length window).
pub fn group_slots(role: Role, slots: &[AvailabilitySlot]) -> Result<Vec<Participant>> {
    let mut participants: Vec<Participant> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for slot in slots {
        let interval = slot.normalize().map_err(|e| MatchError::InvalidSlot {
            participant_id: slot.participant_id.clone(),
            source: Box::new(e),
        })?;

        match positions.get(slot.participant_id.as_str()) {
            Some(&index) => participants[index].intervals.push(interval),
            None => {
                positions.insert(slot.participant_id.as_str(), participants.len());
                participants.push(Participant::new(slot.participant_id.clone(), role).with_interval(interval));
            }
        }
    }

    Ok(participants)
}
