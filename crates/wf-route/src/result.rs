//! The renderable outcome of a routing request.

use wf_core::{DisplayPoint, NodeId, WalkingSpeed};

/// A computed route, owned by the caller.
///
/// Always has at least three points: true origin, one or more path nodes,
/// true destination.  Unavailable routes are reported as
/// [`RouteError::NoRoute`](crate::RouteError::NoRoute), never as an empty
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Canvas points to draw as one connected line.
    pub points: Vec<DisplayPoint>,
    /// Path length plus the walk from each true endpoint to its snapped node.
    pub total_distance_m: f64,
    /// Graph nodes traversed, in order.
    pub path: Vec<NodeId>,
}

impl RouteResult {
    /// Estimated walking time in whole minutes (rounded up).
    pub fn walk_minutes(&self, speed: WalkingSpeed) -> u32 {
        speed.minutes_for(self.total_distance_m)
    }
}
