//! Nearest-node snapping.
//!
//! Venue graphs have tens of nodes, so a linear haversine scan is both the
//! simplest and the fastest option, and it gives a tie-break that is easy to
//! state: the first node at the minimum distance in iteration order wins.

use wf_core::{Coordinate, NodeId};

/// Result of snapping a coordinate onto the graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snap {
    pub node:       NodeId,
    /// Great-circle distance from the query point to `node`, in metres.
    pub distance_m: f64,
}

/// Return the node closest to `point`, or `None` if `nodes` is empty.
pub fn nearest_node<I>(point: Coordinate, nodes: I) -> Option<Snap>
where
    I: IntoIterator<Item = (NodeId, Coordinate)>,
{
    let mut best: Option<Snap> = None;
    for (node, pos) in nodes {
        let distance_m = point.distance_m(pos);
        // Strict `<` keeps the earliest node on ties.
        if best.is_none_or(|b| distance_m < b.distance_m) {
            best = Some(Snap { node, distance_m });
        }
    }
    best
}
