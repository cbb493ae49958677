//! High-level route service: snaps endpoints, plans, and projects.

use std::sync::Arc;

use rayon::prelude::*;

use wf_core::{AccessMode, Coordinate, GeoProjector, PoiKind, PointOfInterest};
use wf_spatial::{DijkstraPlanner, PathPlanner, SpatialError, VenueGraph};

use crate::{RouteError, RouteResult};

/// Wraps a [`PathPlanner`], the shared venue graph, and the display
/// projector.
///
/// # Type parameter
///
/// `P` must implement [`PathPlanner`] (e.g. [`DijkstraPlanner`]).  Swap it at
/// compile time for a different search strategy.
///
/// The service holds no per-request state; `&self` methods may be called
/// from any number of threads.
pub struct RouteService<P: PathPlanner = DijkstraPlanner> {
    /// The search algorithm.
    pub planner: P,
    graph:     Arc<VenueGraph>,
    projector: GeoProjector,
}

impl RouteService<DijkstraPlanner> {
    /// Service using the default linear-scan Dijkstra planner.
    pub fn with_dijkstra(graph: Arc<VenueGraph>, projector: GeoProjector) -> Self {
        Self::new(DijkstraPlanner, graph, projector)
    }
}

impl<P: PathPlanner> RouteService<P> {
    pub fn new(planner: P, graph: Arc<VenueGraph>, projector: GeoProjector) -> Self {
        Self { planner, graph, projector }
    }

    pub fn graph(&self) -> &VenueGraph {
        &self.graph
    }

    pub fn projector(&self) -> &GeoProjector {
        &self.projector
    }

    /// Route from `origin` to a point of interest.
    ///
    /// Returns [`RouteError::NoRoute`] when the destination cannot be reached
    /// under `mode`.
    pub fn route(
        &self,
        origin: Coordinate,
        destination: &PointOfInterest,
        mode: AccessMode,
    ) -> Result<RouteResult, RouteError> {
        self.route_to(origin, destination.location, mode)
            .inspect_err(|e| {
                if e.is_no_route() {
                    tracing::debug!(poi = %destination.id, %mode, "destination unreachable");
                }
            })
    }

    /// Route between two arbitrary coordinates.
    ///
    /// A non-finite endpoint is rejected with
    /// [`SpatialError::InvalidCoordinate`] before any snapping.
    pub fn route_to(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: AccessMode,
    ) -> Result<RouteResult, RouteError> {
        for (label, point) in [("origin", origin), ("destination", destination)] {
            if !point.is_finite() {
                return Err(SpatialError::InvalidCoordinate(format!("{label} {point}")).into());
            }
        }

        let from = self.graph.snap(origin)?;
        let to   = self.graph.snap(destination)?;
        tracing::debug!(
            from = %from.node, from_m = from.distance_m,
            to = %to.node, to_m = to.distance_m,
            "snapped route endpoints"
        );

        let path = self.planner.shortest_path(&self.graph, from.node, to.node, mode)?;

        let mut points = Vec::with_capacity(path.nodes.len() + 2);
        points.push(self.projector.project(origin));
        // Every path node came out of this graph, so the lookup cannot miss.
        points.extend(
            path.nodes
                .iter()
                .filter_map(|&n| self.graph.position(n))
                .map(|pos| self.projector.project(pos)),
        );
        points.push(self.projector.project(destination));

        Ok(RouteResult {
            points,
            total_distance_m: path.total_m + from.distance_m + to.distance_m,
            path: path.nodes,
        })
    }

    /// Route independently to each destination, in parallel.
    ///
    /// Outcomes are returned in the order of `destinations`.  This is a batch
    /// of single-destination queries, not a multi-stop tour.
    pub fn route_many(
        &self,
        origin: Coordinate,
        destinations: &[PointOfInterest],
        mode: AccessMode,
    ) -> Vec<Result<RouteResult, RouteError>> {
        destinations
            .par_iter()
            .map(|poi| self.route(origin, poi, mode))
            .collect()
    }

    /// The POI of `kind` with the shortest reachable route from `origin`.
    ///
    /// Under [`AccessMode::StepFree`] only POIs flagged accessible are
    /// candidates.  Ties go to the earliest POI in `pois`.  `None` if no
    /// candidate is reachable.
    pub fn closest<'a>(
        &self,
        origin: Coordinate,
        pois: &'a [PointOfInterest],
        kind: &PoiKind,
        mode: AccessMode,
    ) -> Option<(&'a PointOfInterest, RouteResult)> {
        let candidates: Vec<&PointOfInterest> = pois
            .iter()
            .filter(|p| &p.kind == kind && (mode == AccessMode::Any || p.accessible))
            .collect();

        let routes: Vec<_> = candidates
            .par_iter()
            .map(|poi| self.route(origin, poi, mode))
            .collect();

        let mut best: Option<(&'a PointOfInterest, RouteResult)> = None;
        for (poi, outcome) in candidates.into_iter().zip(routes) {
            let Ok(route) = outcome else { continue };
            if best
                .as_ref()
                .is_none_or(|(_, b)| route.total_distance_m < b.total_distance_m)
            {
                best = Some((poi, route));
            }
        }
        best
    }
}
