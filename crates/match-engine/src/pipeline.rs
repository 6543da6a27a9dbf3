//! End-to-end scheduling run.
//!
//! Ingestion → graph → matching → assignment, driven by an explicit request
//! passed by value. Nothing here reads or writes process-wide state.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::graph::CompatibilityGraph;
use crate::matching::solve;
use crate::participant::{group_slots, AvailabilitySlot, Role};
use crate::resolver::{assign, Assignment, ScheduleEntry, SkippedPair};

/// Raw availability for one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub recruiters: Vec<AvailabilitySlot>,
    #[serde(default)]
    pub candidates: Vec<AvailabilitySlot>,
}

/// Result of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Scheduled interviews, in recruiter order.
    pub entries: Vec<ScheduleEntry>,
    /// Matched pairs left out because no common window was found.
    pub skipped: Vec<SkippedPair>,
    pub edge_count: usize,
    pub matched_pairs: usize,
    pub unmatched_recruiters: Vec<String>,
    pub unmatched_candidates: Vec<String>,
}

impl ScheduleReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Run the full pipeline over a request.
///
/// # Errors
/// Fails only on invalid input (`MatchError::InvalidSlot`). Empty pools,
/// missing overlaps, and unresolvable pairs give smaller reports.
pub fn schedule(request: ScheduleRequest) -> Result<ScheduleReport> {
    let recruiters = group_slots(Role::Recruiter, &request.recruiters)?;
    let candidates = group_slots(Role::Candidate, &request.candidates)?;

    let graph = CompatibilityGraph::build(recruiters, candidates);
    let matching = solve(&graph);
    let Assignment { entries, skipped } = assign(&matching, graph.recruiters(), graph.candidates());

    let to_owned = |ids: Vec<&str>| ids.into_iter().map(str::to_string).collect::<Vec<_>>();
    let report = ScheduleReport {
        entries,
        skipped,
        edge_count: graph.edge_count(),
        matched_pairs: matching.len(),
        unmatched_recruiters: to_owned(matching.unmatched_recruiters(&graph)),
        unmatched_candidates: to_owned(matching.unmatched_candidates(&graph)),
    };

    info!(
        edges = report.edge_count,
        matched = report.matched_pairs,
        scheduled = report.entries.len(),
        skipped = report.skipped_count(),
        "scheduling run complete"
    );

    Ok(report)
}
