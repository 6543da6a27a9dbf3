//! Maximum-cardinality bipartite matching (Hopcroft–Karp).
//!
//! Each phase runs a breadth-first search from every free recruiter to layer
//! the graph by alternating-path distance. It then augments along a maximal
//! set of vertex-disjoint shortest paths with a layered depth-first search.
//! The search stops when a phase finds no augmenting path; by Berge's lemma the
//! matching is then maximum.
//!
//! Iteration follows input order throughout, so identical graphs always
//! produce identical matchings.

use std::collections::VecDeque;

use crate::graph::CompatibilityGraph;

const INFINITY: usize = usize::MAX;

/// A one-to-one set of `(recruiter, candidate)` edges of a [`CompatibilityGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    recruiter_to_candidate: Vec<Option<usize>>,
    candidate_to_recruiter: Vec<Option<usize>>,
    len: usize,
}

impl Matching {
    /// Build a matching from index pairs, keeping only valid ones.
    ///
    /// A pair is kept when it is an edge of `graph` and neither endpoint is
    /// already matched by an earlier pair.
    pub fn from_pairs<I>(graph: &CompatibilityGraph, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut matching = Matching {
            recruiter_to_candidate: vec![None; graph.recruiter_count()],
            candidate_to_recruiter: vec![None; graph.candidate_count()],
            len: 0,
        };

        for (r, c) in pairs {
            if !graph.has_edge(r, c)
                || matching.recruiter_to_candidate[r].is_some()
                || matching.candidate_to_recruiter[c].is_some()
            {
                continue;
            }
            matching.recruiter_to_candidate[r] = Some(c);
            matching.candidate_to_recruiter[c] = Some(r);
            matching.len += 1;
        }

        matching
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Matched `(recruiter, candidate)` pairs in recruiter order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.recruiter_to_candidate
            .iter()
            .enumerate()
            .filter_map(|(r, mate)| mate.map(|c| (r, c)))
    }

    pub fn candidate_for(&self, recruiter: usize) -> Option<usize> {
        self.recruiter_to_candidate.get(recruiter).copied().flatten()
    }

    pub fn recruiter_for(&self, candidate: usize) -> Option<usize> {
        self.candidate_to_recruiter.get(candidate).copied().flatten()
    }

    /// Matched pairs as `(recruiter id, candidate id)`.
    pub fn by_id<'g>(&self, graph: &'g CompatibilityGraph) -> Vec<(&'g str, &'g str)> {
        self.pairs()
            .filter_map(|(r, c)| {
                let recruiter = graph.recruiter(r)?;
                let candidate = graph.candidate(c)?;
                Some((recruiter.id.as_str(), candidate.id.as_str()))
            })
            .collect()
    }

    /// Ids of recruiters left without a candidate.
    pub fn unmatched_recruiters<'g>(&self, graph: &'g CompatibilityGraph) -> Vec<&'g str> {
        graph
            .recruiters()
            .iter()
            .enumerate()
            .filter(|(r, _)| self.candidate_for(*r).is_none())
            .map(|(_, participant)| participant.id.as_str())
            .collect()
    }

    /// Ids of candidates left without a recruiter.
    pub fn unmatched_candidates<'g>(&self, graph: &'g CompatibilityGraph) -> Vec<&'g str> {
        graph
            .candidates()
            .iter()
            .enumerate()
            .filter(|(c, _)| self.recruiter_for(*c).is_none())
            .map(|(_, participant)| participant.id.as_str())
            .collect()
    }
}

/// Compute a maximum-cardinality matching of `graph`.
///
/// A graph without edges yields an empty matching.
pub fn solve(graph: &CompatibilityGraph) -> Matching {
    if graph.edge_count() == 0 {
        return Matching::from_pairs(graph, std::iter::empty());
    }

    let mut search = HopcroftKarp::new(graph);
    while search.layer() {
        for r in 0..graph.recruiter_count() {
            if search.pair_left[r].is_none() {
                search.augment(r);
            }
        }
    }

    // Route the result through the validating constructor so only graph edges
    // with recruiter keys and candidate values survive.
    let pairs: Vec<(usize, usize)> = search
        .pair_left
        .iter()
        .enumerate()
        .filter_map(|(r, mate)| mate.map(|c| (r, c)))
        .collect();
    Matching::from_pairs(graph, pairs)
}

struct HopcroftKarp<'g> {
    graph: &'g CompatibilityGraph,
    pair_left: Vec<Option<usize>>,
    pair_right: Vec<Option<usize>>,
    dist: Vec<usize>,
    /// Next adjacency position to try per recruiter, reset every phase.
    cursor: Vec<usize>,
    /// Length (in recruiter layers) of the shortest augmenting path this phase.
    shortest: usize,
}

impl<'g> HopcroftKarp<'g> {
    fn new(graph: &'g CompatibilityGraph) -> Self {
        Self {
            graph,
            pair_left: vec![None; graph.recruiter_count()],
            pair_right: vec![None; graph.candidate_count()],
            dist: vec![INFINITY; graph.recruiter_count()],
            cursor: vec![0; graph.recruiter_count()],
            shortest: INFINITY,
        }
    }

    /// BFS from all free recruiters. Returns true if an augmenting path exists.
    fn layer(&mut self) -> bool {
        let mut queue = VecDeque::new();
        for (r, mate) in self.pair_left.iter().enumerate() {
            if mate.is_none() {
                self.dist[r] = 0;
                queue.push_back(r);
            } else {
                self.dist[r] = INFINITY;
            }
        }
        self.cursor.fill(0);
        self.shortest = INFINITY;

        let graph = self.graph;
        while let Some(r) = queue.pop_front() {
            if self.dist[r] >= self.shortest {
                continue;
            }
            for &c in graph.candidates_of(r) {
                match self.pair_right[c] {
                    None => self.shortest = self.shortest.min(self.dist[r] + 1),
                    Some(next) if self.dist[next] == INFINITY => {
                        self.dist[next] = self.dist[r] + 1;
                        queue.push_back(next);
                    }
                    Some(_) => {}
                }
            }
        }

        self.shortest != INFINITY
    }

    /// Layered DFS from the free recruiter `root`; flips the path on success.
    ///
    /// The path is kept on an explicit stack, so its depth is bounded by the
    /// number of recruiters rather than by the thread's stack. Each recruiter on
    /// the stack has its cursor parked on the edge leading to the next frame.
    fn augment(&mut self, root: usize) -> bool {
        if self.dist[root] >= self.shortest {
            return false;
        }
        let graph = self.graph;
        let mut path = vec![root];

        while let Some(&r) = path.last() {
            let adjacent = graph.candidates_of(r);
            let mut descend = None;

            while let Some(&c) = adjacent.get(self.cursor[r]) {
                match self.pair_right[c] {
                    None if self.dist[r] + 1 == self.shortest => {
                        self.flip(&path);
                        return true;
                    }
                    Some(next) if self.dist[next] == self.dist[r] + 1 => {
                        descend = Some(next);
                        break;
                    }
                    _ => self.cursor[r] += 1,
                }
            }

            match descend {
                Some(next) => path.push(next),
                None => {
                    // Dead end for the rest of this phase.
                    self.dist[r] = INFINITY;
                    path.pop();
                    if let Some(&parent) = path.last() {
                        self.cursor[parent] += 1;
                    }
                }
            }
        }

        false
    }

    /// Match every recruiter on `path` to the candidate under its cursor.
    fn flip(&mut self, path: &[usize]) {
        let graph = self.graph;
        for &r in path {
            let c = graph.candidates_of(r)[self.cursor[r]];
            self.pair_left[r] = Some(c);
            self.pair_right[c] = Some(r);
        }
    }
}
