//! Spatial-subsystem error type.

use thiserror::Error;

use wf_core::NodeId;

/// Errors produced by `wf-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// No path under the requested access mode.  An expected outcome, not a
    /// fault: step-free routing often has no answer.
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("venue graph has no nodes")]
    EmptyGraph,

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("edge references unknown node '{0}'")]
    UnknownNode(String),

    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    #[error("edge {a}–{b} has invalid length {length_m} m")]
    InvalidEdgeLength { a: String, b: String, length_m: f64 },

    #[error("too many {0} for 32-bit ids")]
    CapacityExceeded(&'static str),

    #[error("non-finite coordinate for '{0}'")]
    InvalidCoordinate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
