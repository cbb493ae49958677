//! Straight-line ranking of points of interest.
//!
//! Used where the UI lists "nearest help points" or answers a "where is the
//! nearest X" question before any route is requested.  No graph is involved:
//! candidates are ordered by great-circle distance from the visitor, and
//! accessibility is not considered.

use wf_core::{Coordinate, PoiKind, PointOfInterest};

/// POIs whose kind is in `kinds`, nearest first, with their straight-line
/// distance in metres.
///
/// Equal distances keep input order.  `limit` truncates the list (`None`
/// returns every match).  An empty `kinds` slice matches nothing.
pub fn nearest_pois<'a>(
    origin: Coordinate,
    pois: &'a [PointOfInterest],
    kinds: &[PoiKind],
    limit: Option<usize>,
) -> Vec<(&'a PointOfInterest, f64)> {
    let mut ranked: Vec<(&PointOfInterest, f64)> = pois
        .iter()
        .filter(|p| kinds.contains(&p.kind))
        .map(|p| (p, origin.distance_m(p.location)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}
