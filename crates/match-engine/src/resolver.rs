//! Concrete interview windows for matched pairs.
//!
//! For every matched pair the resolver scans all window combinations and keeps
//! the overlap with the earliest start. The choice is greedy and independent
//! per pair; since the matching is one-to-one, no participant is booked twice.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::interval::{clock, Interval};
use crate::matching::Matching;
use crate::participant::Participant;

/// One scheduled interview, reported on the original 24-hour clock.
///
/// `end` may be earlier than `start` when the window crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub recruiter_id: String,
    pub candidate_id: String,
    #[serde(with = "clock")]
    pub start: NaiveTime,
    #[serde(with = "clock")]
    pub end: NaiveTime,
}

impl ScheduleEntry {
    /// The entry's window in normalized form.
    pub fn interval(&self) -> Result<Interval> {
        Interval::normalize(self.start, self.end)
    }
}

/// A matched pair that has no positive-duration common window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPair {
    pub recruiter_id: String,
    pub candidate_id: String,
}

/// Output of [`assign`]: scheduled entries plus the pairs that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pub entries: Vec<ScheduleEntry>,
    pub skipped: Vec<SkippedPair>,
}

/// Assign one concrete window to each matched pair.
///
/// `recruiters` and `candidates` are indexed by the positions used in
/// `matching`, normally [`CompatibilityGraph::recruiters`] and
/// [`CompatibilityGraph::candidates`]. A pair without any valid overlap is
/// left out of the schedule and recorded in [`Assignment::skipped`]. So is a
/// pair whose index has no participant in the given slices; the missing side
/// is reported as `#<index>`.
///
/// [`CompatibilityGraph::recruiters`]: crate::graph::CompatibilityGraph::recruiters
/// [`CompatibilityGraph::candidates`]: crate::graph::CompatibilityGraph::candidates
pub fn assign(
    matching: &Matching,
    recruiters: &[Participant],
    candidates: &[Participant],
) -> Assignment {
    let mut assignment = Assignment::default();

    for (r, c) in matching.pairs() {
        let (Some(recruiter), Some(candidate)) = (recruiters.get(r), candidates.get(c)) else {
            warn!(recruiter = r, candidate = c, "matched pair refers to an unknown participant");
            assignment.skipped.push(SkippedPair {
                recruiter_id: id_or_position(recruiters.get(r), r),
                candidate_id: id_or_position(candidates.get(c), c),
            });
            continue;
        };

        match earliest_window(recruiter, candidate) {
            Some(window) => assignment.entries.push(ScheduleEntry {
                recruiter_id: recruiter.id.clone(),
                candidate_id: candidate.id.clone(),
                start: window.start(),
                end: window.end(),
            }),
            None => {
                warn!(
                    recruiter = %recruiter.id,
                    candidate = %candidate.id,
                    "matched pair has no overlapping window, skipping"
                );
                assignment.skipped.push(SkippedPair {
                    recruiter_id: recruiter.id.clone(),
                    candidate_id: candidate.id.clone(),
                });
            }
        }
    }

    debug!(
        scheduled = assignment.entries.len(),
        skipped = assignment.skipped.len(),
        "resolved interview windows"
    );

    assignment
}

fn id_or_position(participant: Option<&Participant>, index: usize) -> String {
    match participant {
        Some(participant) => participant.id.clone(),
        None => format!("#{index}"),
    }
}

/// The earliest-starting positive-duration overlap between two participants.
///
/// Ties on the start keep the first combination in input order
/// (recruiter window first, then candidate window).
pub fn earliest_window(recruiter: &Participant, candidate: &Participant) -> Option<Interval> {
    let mut best: Option<Interval> = None;

    for mine in &recruiter.intervals {
        for theirs in &candidate.intervals {
            let Some(window) = mine.intersection(theirs) else {
                continue;
            };
            if best.is_none_or(|current| window.start_offset() < current.start_offset()) {
                best = Some(window);
            }
        }
    }

    best
}
