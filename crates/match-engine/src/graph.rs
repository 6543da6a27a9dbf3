//! Bipartite compatibility graph between recruiters and candidates.
//!
//! A recruiter and a candidate are joined by a single edge when at least one
//! pair of their availability windows overlaps. The graph is stored as two
//! adjacency lists (recruiter → candidates and candidate → recruiters) keyed by
//! input position, with id lookup maps on the side.

use std::collections::HashMap;

use tracing::debug;

use crate::participant::Participant;

#[derive(Debug, Clone, Default)]
pub struct CompatibilityGraph {
    recruiters: Vec<Participant>,
    candidates: Vec<Participant>,
    recruiter_adj: Vec<Vec<usize>>,
    candidate_adj: Vec<Vec<usize>>,
    recruiter_ids: HashMap<String, usize>,
    candidate_ids: HashMap<String, usize>,
    edge_count: usize,
}

impl CompatibilityGraph {
    /// Build the graph from both partitions.
    ///
    /// Every participant becomes a node, including those without any
    /// compatible counterpart. Edges are discovered in recruiter input order,
    /// then candidate input order, and each adjacency list inherits that order.
    /// An empty partition yields a graph with no edges.
    pub fn build(recruiters: Vec<Participant>, candidates: Vec<Participant>) -> Self {
        let mut recruiter_adj = vec![Vec::new(); recruiters.len()];
        let mut candidate_adj = vec![Vec::new(); candidates.len()];
        let mut edge_count = 0;

        for (r, recruiter) in recruiters.iter().enumerate() {
            for (c, candidate) in candidates.iter().enumerate() {
                // Existence only: the scan stops at the first overlapping pair.
                if recruiter.shares_availability_with(candidate) {
                    recruiter_adj[r].push(c);
                    candidate_adj[c].push(r);
                    edge_count += 1;
                }
            }
        }

        debug!(
            recruiters = recruiters.len(),
            candidates = candidates.len(),
            edges = edge_count,
            "built compatibility graph"
        );

        Self {
            recruiter_ids: index_by_id(&recruiters),
            candidate_ids: index_by_id(&candidates),
            recruiters,
            candidates,
            recruiter_adj,
            candidate_adj,
            edge_count,
        }
    }

    pub fn recruiters(&self) -> &[Participant] {
        &self.recruiters
    }

    pub fn candidates(&self) -> &[Participant] {
        &self.candidates
    }

    pub fn recruiter(&self, index: usize) -> Option<&Participant> {
        self.recruiters.get(index)
    }

    pub fn candidate(&self, index: usize) -> Option<&Participant> {
        self.candidates.get(index)
    }

    pub fn recruiter_count(&self) -> usize {
        self.recruiters.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn has_edge(&self, recruiter: usize, candidate: usize) -> bool {
        self.candidates_of(recruiter).contains(&candidate)
    }

    /// Candidates adjacent to a recruiter, in candidate input order.
    pub fn candidates_of(&self, recruiter: usize) -> &[usize] {
        self.recruiter_adj.get(recruiter).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Recruiters adjacent to a candidate, in recruiter input order.
    pub fn recruiters_of(&self, candidate: usize) -> &[usize] {
        self.candidate_adj.get(candidate).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All edges as `(recruiter, candidate)` index pairs, in discovery order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.recruiter_adj
            .iter()
            .enumerate()
            .flat_map(|(r, adjacent)| adjacent.iter().map(move |&c| (r, c)))
    }

    /// Position of the first recruiter with this id.
    pub fn recruiter_index(&self, id: &str) -> Option<usize> {
        self.recruiter_ids.get(id).copied()
    }

    /// Position of the first candidate with this id.
    pub fn candidate_index(&self, id: &str) -> Option<usize> {
        self.candidate_ids.get(id).copied()
    }

    /// Recruiters with no compatible candidate.
    pub fn isolated_recruiters(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.recruiters
            .iter()
            .zip(&self.recruiter_adj)
            .filter(|(_, adjacent)| adjacent.is_empty())
            .map(|(participant, _)| participant)
    }

    /// Candidates with no compatible recruiter.
    pub fn isolated_candidates(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.candidates
            .iter()
            .zip(&self.candidate_adj)
            .filter(|(_, adjacent)| adjacent.is_empty())
            .map(|(participant, _)| participant)
    }
}

/// Free-function form of [`CompatibilityGraph::build`].
pub fn build(recruiters: Vec<Participant>, candidates: Vec<Participant>) -> CompatibilityGraph {
    CompatibilityGraph::build(recruiters, candidates)
}

fn index_by_id(participants: &[Participant]) -> HashMap<String, usize> {
    let mut ids = HashMap::with_capacity(participants.len());
    for (index, participant) in participants.iter().enumerate() {
        ids.entry(participant.id.clone()).or_insert(index);
    }
    ids
}
