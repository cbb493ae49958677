use thiserror::Error;

use wf_core::{NodeId, WfError};
use wf_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum RouteError {
    /// No walkable route under the requested access mode.  Callers show no
    /// line and no estimate; this is not a fault.
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error(transparent)]
    Spatial(SpatialError),

    #[error(transparent)]
    Core(#[from] WfError),
}

impl RouteError {
    /// `true` for the expected "route unavailable" outcome.
    pub fn is_no_route(&self) -> bool {
        matches!(self, RouteError::NoRoute { .. })
    }
}

impl From<SpatialError> for RouteError {
    fn from(err: SpatialError) -> Self {
        match err {
            SpatialError::NoPath { from, to } => RouteError::NoRoute { from, to },
            other => RouteError::Spatial(other),
        }
    }
}
