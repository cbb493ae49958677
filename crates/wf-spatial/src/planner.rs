//! Path-planner trait and Dijkstra implementations.
//!
//! # Pluggability
//!
//! `wf-route` calls planning via the [`PathPlanner`] trait, so applications
//! can swap the search strategy without touching the route service.
//!
//! | Planner                 | Selection step          | Use for                  |
//! |-------------------------|-------------------------|--------------------------|
//! | [`DijkstraPlanner`]     | linear scan, O(V²)      | venue graphs (tens of nodes) |
//! | [`HeapDijkstraPlanner`] | binary heap, O(E log V) | campus-sized graphs      |
//!
//! Both return the same distances; on equal-length alternatives they may
//! pick different node sequences.
//!
//! # Search state
//!
//! The static [`VenueGraph`] is never touched during a search.  Each call
//! allocates its own [`Adjacency`] view and distance/predecessor arena, so one
//! planner can serve any number of threads at once.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use wf_core::{AccessMode, NodeId};

use crate::network::{Adjacency, VenueGraph};
use crate::{SpatialError, SpatialResult};

// ── NodePath ──────────────────────────────────────────────────────────────────

/// The result of a planning query: nodes in travel order and the summed edge
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePath {
    /// Nodes from start to end inclusive.  Never empty.
    pub nodes: Vec<NodeId>,
    /// Sum of traversed edge lengths in metres.
    pub total_m: f64,
}

impl NodePath {
    /// `true` if start and end are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}

// ── PathPlanner trait ─────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the route service can fan out
/// independent queries across Rayon worker threads.
pub trait PathPlanner: Send + Sync {
    /// Compute the shortest path from `start` to `end` using only the edges
    /// `mode` permits.
    ///
    /// `start == end` yields a one-node path of length 0.  Returns
    /// [`SpatialError::NoPath`] when `end` is unreachable under `mode`.
    fn shortest_path(
        &self,
        graph: &VenueGraph,
        start: NodeId,
        end: NodeId,
        mode: AccessMode,
    ) -> SpatialResult<NodePath>;
}

fn check_endpoints(graph: &VenueGraph, start: NodeId, end: NodeId) -> SpatialResult<()> {
    for node in [start, end] {
        if !graph.contains(node) {
            return Err(SpatialError::NodeNotFound(node));
        }
    }
    Ok(())
}

// ── SearchState ───────────────────────────────────────────────────────────────

/// Per-query arena indexed by `NodeId`.
struct SearchState {
    /// Best known distance (m); `INFINITY` until reached.
    dist:    Vec<f64>,
    /// Predecessor on the best known path; `NodeId::INVALID` if none.
    prev:    Vec<NodeId>,
    /// Settled nodes are final and never re-selected.
    settled: Vec<bool>,
}

impl SearchState {
    fn new(node_count: usize, start: NodeId) -> Self {
        let mut dist = vec![f64::INFINITY; node_count];
        dist[start.index()] = 0.0;
        Self {
            dist,
            prev:    vec![NodeId::INVALID; node_count],
            settled: vec![false; node_count],
        }
    }

    /// Unsettled node with the smallest finite distance; lowest `NodeId` on
    /// ties.
    fn closest_unsettled(&self) -> Option<NodeId> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in self.dist.iter().enumerate() {
            if self.settled[i] || !d.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| NodeId(i as u32))
    }

    fn relax(&mut self, adjacency: &Adjacency, node: NodeId) {
        let base = self.dist[node.index()];
        for (neighbor, length_m) in adjacency.neighbors(node) {
            if self.settled[neighbor.index()] {
                continue;
            }
            let candidate = base + length_m;
            if candidate < self.dist[neighbor.index()] {
                self.dist[neighbor.index()] = candidate;
                self.prev[neighbor.index()] = node;
            }
        }
    }

    /// Follow predecessors from `end` back to `start`.
    ///
    /// A chain that does not arrive at `start` means `end` was never reached.
    fn reconstruct(&self, start: NodeId, end: NodeId) -> SpatialResult<NodePath> {
        let mut nodes = vec![end];
        let mut cur = end;
        // A well-formed chain has at most V links; the bound rules out cycles.
        for _ in 0..self.prev.len() {
            let p = self.prev[cur.index()];
            if p == NodeId::INVALID {
                break;
            }
            nodes.push(p);
            cur = p;
        }
        nodes.reverse();

        if nodes[0] != start || !self.dist[end.index()].is_finite() {
            return Err(SpatialError::NoPath { from: start, to: end });
        }
        Ok(NodePath { nodes, total_m: self.dist[end.index()] })
    }
}

// ── DijkstraPlanner ───────────────────────────────────────────────────────────

/// Classic Dijkstra with a linear scan for the next node to settle.
///
/// Settles at most `V` nodes and stops as soon as `end` is settled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl PathPlanner for DijkstraPlanner {
    fn shortest_path(
        &self,
        graph: &VenueGraph,
        start: NodeId,
        end: NodeId,
        mode: AccessMode,
    ) -> SpatialResult<NodePath> {
        check_endpoints(graph, start, end)?;

        let adjacency = graph.adjacency(mode);
        let mut state = SearchState::new(graph.node_count(), start);
        let mut settled = 0usize;

        while let Some(node) = state.closest_unsettled() {
            state.settled[node.index()] = true;
            settled += 1;
            if node == end {
                break;
            }
            state.relax(&adjacency, node);
        }

        let result = state.reconstruct(start, end);
        tracing::debug!(
            %start, %end, %mode,
            arcs = adjacency.arc_count(),
            settled,
            found = result.is_ok(),
            "dijkstra search finished"
        );
        result
    }
}

// ── HeapDijkstraPlanner ───────────────────────────────────────────────────────

/// Dijkstra driven by a binary min-heap with lazy deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapDijkstraPlanner;

impl PathPlanner for HeapDijkstraPlanner {
    fn shortest_path(
        &self,
        graph: &VenueGraph,
        start: NodeId,
        end: NodeId,
        mode: AccessMode,
    ) -> SpatialResult<NodePath> {
        check_endpoints(graph, start, end)?;

        let adjacency = graph.adjacency(mode);
        let mut state = SearchState::new(graph.node_count(), start);

        // Min-heap: (cost, node).  Reverse makes BinaryHeap (max) behave as a
        // min-heap; the NodeId secondary key makes tie-breaking deterministic.
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((OrderedFloat(0.0), start)));

        while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
            // Skip stale heap entries.
            if state.settled[node.index()] || cost > state.dist[node.index()] {
                continue;
            }
            state.settled[node.index()] = true;
            if node == end {
                break;
            }

            for (neighbor, length_m) in adjacency.neighbors(node) {
                if state.settled[neighbor.index()] {
                    continue;
                }
                let candidate = cost + length_m;
                if candidate < state.dist[neighbor.index()] {
                    state.dist[neighbor.index()] = candidate;
                    state.prev[neighbor.index()] = node;
                    heap.push(Reverse((OrderedFloat(candidate), neighbor)));
                }
            }
        }

        let result = state.reconstruct(start, end);
        tracing::debug!(%start, %end, %mode, found = result.is_ok(), "heap dijkstra search finished");
        result
    }
}
