//! Destination filtering for the map's category bar.

use rustc_hash::FxHashSet;

use wf_core::{PoiKind, PointOfInterest};

/// Which POIs to offer as destinations.
///
/// An empty kind set means "all kinds".  With `accessible_only` set, POIs
/// not flagged accessible are hidden regardless of kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoiFilter {
    pub kinds:           FxHashSet<PoiKind>,
    pub accessible_only: bool,
}

impl PoiFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: PoiKind) -> Self {
        self.kinds.insert(kind);
        self
    }

    pub fn with_accessible_only(mut self, accessible_only: bool) -> Self {
        self.accessible_only = accessible_only;
        self
    }

    /// Flip `kind` in or out of the set.  Returns `true` if it is now active.
    pub fn toggle(&mut self, kind: PoiKind) -> bool {
        if self.kinds.remove(&kind) {
            false
        } else {
            self.kinds.insert(kind);
            true
        }
    }

    pub fn matches(&self, poi: &PointOfInterest) -> bool {
        if self.accessible_only && !poi.accessible {
            return false;
        }
        self.kinds.is_empty() || self.kinds.contains(&poi.kind)
    }

    /// POIs passing the filter, in input order.
    pub fn apply<'a>(&'a self, pois: &'a [PointOfInterest]) -> impl Iterator<Item = &'a PointOfInterest> + 'a {
        pois.iter().filter(move |p| self.matches(p))
    }
}
