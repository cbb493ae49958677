//! Accessibility constraint applied to path searches.

/// Which edges a route may use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessMode {
    /// Every walkable edge is usable.
    #[default]
    Any,
    /// Only edges flagged as step-free; all others are pruned from the search.
    StepFree,
}

impl AccessMode {
    /// Map the UI's "accessible only" toggle onto a mode.
    #[inline]
    pub fn from_accessible_only(accessible_only: bool) -> Self {
        if accessible_only { AccessMode::StepFree } else { AccessMode::Any }
    }

    /// `true` if an edge with the given accessibility flag may be traversed.
    #[inline]
    pub fn permits(self, edge_accessible: bool) -> bool {
        match self {
            AccessMode::Any      => true,
            AccessMode::StepFree => edge_accessible,
        }
    }

    /// Human-readable label, used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessMode::Any      => "any",
            AccessMode::StepFree => "step-free",
        }
    }
}

impl From<bool> for AccessMode {
    fn from(accessible_only: bool) -> Self {
        Self::from_accessible_only(accessible_only)
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
