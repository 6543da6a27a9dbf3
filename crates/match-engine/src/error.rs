//! Error types for match-engine operations.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A slot whose start equals its end has no duration on any clock.
    #[error("Empty interval: {start} to {end} has zero duration")]
    EmptyInterval { start: NaiveTime, end: NaiveTime },

    #[error("Invalid time: {0:?} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),

    /// Ingestion failure attributed to the participant that submitted the slot.
    #[error("Invalid slot for {participant_id}: {source}")]
    InvalidSlot {
        participant_id: String,
        #[source]
        source: Box<MatchError>,
    },
}

pub type Result<T> = std::result::Result<T, MatchError>;
