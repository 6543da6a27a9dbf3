//! # match-engine
//!
//! Availability matching for interview scheduling.
//!
//! Recruiters and candidates submit time-of-day availability windows. The
//! engine normalizes the windows (including overnight ones), links every
//! recruiter-candidate pair with a common window, computes a maximum one-to-one
//! matching, and picks the earliest common window for each matched pair.
//!
//! ## Quick start
//!
//! ```rust
//! use match_engine::{schedule, ScheduleRequest};
//!
//! let request: ScheduleRequest = serde_json::from_str(
//!     r#"{
//!         "recruiters": [{"participant_id": "r1", "start": "09:00", "end": "10:00"}],
//!         "candidates": [{"participant_id": "c1", "start": "09:30", "end": "11:00"}]
//!     }"#,
//! )
//! .unwrap();
//!
//! let report = schedule(request).unwrap();
//! assert_eq!(report.entries.len(), 1);
//! assert_eq!(report.entries[0].start.to_string(), "09:30:00");
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — clock-time parsing and overnight normalization
//! - [`participant`] — participants and slot ingestion
//! - [`graph`] — bipartite compatibility graph
//! - [`matching`] — Hopcroft–Karp maximum matching
//! - [`resolver`] — earliest-start window per matched pair
//! - [`pipeline`] — the whole run from request to report
//! - [`error`] — error types

pub mod error;
pub mod graph;
pub mod interval;
pub mod matching;
pub mod participant;
pub mod pipeline;
pub mod resolver;

pub use error::MatchError;
pub use graph::CompatibilityGraph;
pub use interval::{normalize, parse_clock, Interval};
pub use matching::{solve, Matching};
pub use participant::{group_slots, AvailabilitySlot, Participant, Role};
pub use pipeline::{schedule, ScheduleReport, ScheduleRequest};
pub use resolver::{assign, Assignment, ScheduleEntry, SkippedPair};
