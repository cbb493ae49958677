//! Venue path graph and builder.
//!
//! # Data layout
//!
//! The static graph stores nodes and **undirected** edges as parallel arrays
//! indexed by `NodeId` / `EdgeId`.  It is built once, validated, and never
//! mutated afterwards; share it behind an `Arc`.
//!
//! Searches do not walk the edge list directly.  Each query asks for an
//! [`Adjacency`]: a **Compressed Sparse Row** view containing both directions
//! of every edge the query's [`AccessMode`] permits.  Given a `NodeId n`, its
//! outgoing arcs occupy
//!
//! ```text
//! arc_to[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! Pruned edges are simply absent from the view, so the planner never has to
//! know about accessibility at all.

use rustc_hash::FxHashMap;

use wf_core::{AccessMode, Coordinate, EdgeId, NodeId};

use crate::locator::{Snap, nearest_node};
use crate::{SpatialError, SpatialResult};

// ── VenueGraph ────────────────────────────────────────────────────────────────

/// Walkable path network of a venue.
///
/// Fields are `pub` for direct indexed access.  Do not construct directly;
/// use [`VenueGraphBuilder`], which enforces that every edge references an
/// existing node, that node keys are unique, and that the graph is non-empty.
#[derive(Debug)]
pub struct VenueGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Coordinate>,

    /// Dataset key of each node (`"n1"`, …).  Indexed by `NodeId`.
    pub node_key: Vec<String>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    pub edge_a: Vec<NodeId>,
    pub edge_b: Vec<NodeId>,

    /// Walking length of each edge in metres.  Always finite and `> 0`.
    pub edge_length_m: Vec<f64>,

    /// `true` if the edge is step-free.
    pub edge_accessible: Vec<bool>,

    key_index: FxHashMap<String, NodeId>,
}

impl VenueGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_a.len()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Resolve a dataset key to its `NodeId`.
    pub fn node_by_key(&self, key: &str) -> Option<NodeId> {
        self.key_index.get(key).copied()
    }

    /// Dataset key of `node`.
    pub fn key(&self, node: NodeId) -> Option<&str> {
        self.node_key.get(node.index()).map(String::as_str)
    }

    pub fn position(&self, node: NodeId) -> Option<Coordinate> {
        self.node_pos.get(node.index()).copied()
    }

    /// All nodes with their positions, in `NodeId` order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Coordinate)> + '_ {
        self.node_pos
            .iter()
            .enumerate()
            .map(|(i, &pos)| (NodeId(i as u32), pos))
    }

    /// Number of edges usable under `mode`.
    pub fn permitted_edge_count(&self, mode: AccessMode) -> usize {
        self.edge_accessible.iter().filter(|&&acc| mode.permits(acc)).count()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Snap `point` to the nearest node (first in `NodeId` order on ties).
    ///
    /// A built graph always has at least one node, so `EmptyGraph` is only
    /// reachable through a hand-assembled value.
    pub fn snap(&self, point: Coordinate) -> SpatialResult<Snap> {
        nearest_node(point, self.nodes()).ok_or(SpatialError::EmptyGraph)
    }

    // ── Search views ──────────────────────────────────────────────────────

    /// Build the bidirectional adjacency view for `mode`.
    ///
    /// Time complexity: O(E log E) for the arc sort.
    pub fn adjacency(&self, mode: AccessMode) -> Adjacency {
        let node_count = self.node_count();

        let mut arcs: Vec<(NodeId, NodeId, f64)> = Vec::with_capacity(self.edge_count() * 2);
        for e in 0..self.edge_count() {
            if !mode.permits(self.edge_accessible[e]) {
                continue;
            }
            let (a, b, w) = (self.edge_a[e], self.edge_b[e], self.edge_length_m[e]);
            arcs.push((a, b, w));
            arcs.push((b, a, w));
        }
        // Stable sort keeps dataset edge order within each row.
        arcs.sort_by_key(|&(from, _, _)| from.0);

        let mut out_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &arcs {
            out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            out_start[i] += out_start[i - 1];
        }

        Adjacency {
            out_start,
            arc_to:       arcs.iter().map(|&(_, to, _)| to).collect(),
            arc_length_m: arcs.iter().map(|&(_, _, w)| w).collect(),
        }
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

/// Per-query CSR view of the permitted arcs.  See the module docs.
#[derive(Debug, Clone)]
pub struct Adjacency {
    out_start:    Vec<u32>,
    arc_to:       Vec<NodeId>,
    arc_length_m: Vec<f64>,
}

impl Adjacency {
    pub fn arc_count(&self) -> usize {
        self.arc_to.len()
    }

    /// `(neighbor, length_m)` for every permitted arc leaving `node`.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let start = self.out_start[node.index()] as usize;
        let end   = self.out_start[node.index() + 1] as usize;
        (start..end).map(|i| (self.arc_to[i], self.arc_length_m[i]))
    }
}

// ── VenueGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`VenueGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use wf_core::Coordinate;
/// use wf_spatial::VenueGraphBuilder;
///
/// let mut b = VenueGraphBuilder::new();
/// let a = b.add_node("n1", Coordinate::new(25.670, -100.250)).unwrap();
/// let c = b.add_node("n2", Coordinate::new(25.6705, -100.249)).unwrap();
/// b.add_path(a, c, 120.0, true).unwrap();
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1); // undirected
/// ```
pub struct VenueGraphBuilder {
    nodes:     Vec<(String, Coordinate)>,
    key_index: FxHashMap<String, NodeId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    a:          NodeId,
    b:          NodeId,
    length_m:   f64,
    accessible: bool,
}

impl VenueGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes:     Vec::new(),
            key_index: FxHashMap::default(),
            raw_edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            key_index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, key: impl Into<String>, pos: Coordinate) -> SpatialResult<NodeId> {
        let key = key.into();
        if self.key_index.contains_key(&key) {
            return Err(SpatialError::DuplicateNode(key));
        }
        let id = NodeId::try_from(self.nodes.len())
            .map_err(|_| SpatialError::CapacityExceeded("nodes"))?;
        self.key_index.insert(key.clone(), id);
        self.nodes.push((key, pos));
        Ok(id)
    }

    /// Add an undirected walkable segment between two nodes.
    ///
    /// Endpoints and length are checked in [`build`](Self::build).
    pub fn add_path(
        &mut self,
        a: NodeId,
        b: NodeId,
        length_m: f64,
        accessible: bool,
    ) -> SpatialResult<EdgeId> {
        let id = EdgeId::try_from(self.raw_edges.len())
            .map_err(|_| SpatialError::CapacityExceeded("edges"))?;
        self.raw_edges.push(RawEdge { a, b, length_m, accessible });
        Ok(id)
    }

    /// Like [`add_path`](Self::add_path) but resolves dataset keys.
    pub fn add_path_by_key(
        &mut self,
        a: &str,
        b: &str,
        length_m: f64,
        accessible: bool,
    ) -> SpatialResult<EdgeId> {
        let a = self.node_by_key(a)?;
        let b = self.node_by_key(b)?;
        self.add_path(a, b, length_m, accessible)
    }

    fn node_by_key(&self, key: &str) -> SpatialResult<NodeId> {
        self.key_index
            .get(key)
            .copied()
            .ok_or_else(|| SpatialError::UnknownNode(key.to_owned()))
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder, validate, and produce a [`VenueGraph`].
    pub fn build(self) -> SpatialResult<VenueGraph> {
        if self.nodes.is_empty() {
            return Err(SpatialError::EmptyGraph);
        }
        if let Some((key, _)) = self.nodes.iter().find(|(_, pos)| !pos.is_finite()) {
            return Err(SpatialError::InvalidCoordinate(key.clone()));
        }

        let node_count = self.nodes.len();
        for e in &self.raw_edges {
            for end in [e.a, e.b] {
                if end.index() >= node_count {
                    return Err(SpatialError::NodeNotFound(end));
                }
            }
            if !(e.length_m.is_finite() && e.length_m > 0.0) {
                return Err(SpatialError::InvalidEdgeLength {
                    a:        self.nodes[e.a.index()].0.clone(),
                    b:        self.nodes[e.b.index()].0.clone(),
                    length_m: e.length_m,
                });
            }
        }

        let (node_key, node_pos): (Vec<String>, Vec<Coordinate>) = self.nodes.into_iter().unzip();

        Ok(VenueGraph {
            node_pos,
            node_key,
            edge_a:          self.raw_edges.iter().map(|e| e.a).collect(),
            edge_b:          self.raw_edges.iter().map(|e| e.b).collect(),
            edge_length_m:   self.raw_edges.iter().map(|e| e.length_m).collect(),
            edge_accessible: self.raw_edges.iter().map(|e| e.accessible).collect(),
            key_index:       self.key_index,
        })
    }
}

impl Default for VenueGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
