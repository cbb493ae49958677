//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `WfError` as one variant
//! where core operations (configuration, projection) can fail underneath them.

use thiserror::Error;

/// The error type for `wf-core`.
#[derive(Debug, Error)]
pub enum WfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `wf-core`.
pub type WfResult<T> = Result<T, WfError>;
