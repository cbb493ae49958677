//! `wf-core`: foundational types for the venue wayfinding workspace.
//!
//! This crate is a dependency of every other `wf-*` crate.  It has no `wf-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`                                    |
//! | [`geo`]         | `Coordinate`, haversine distance                      |
//! | [`projection`]  | `GeoProjector`, `DisplayPoint`                        |
//! | [`access`]      | `AccessMode` (any path vs. step-free only)            |
//! | [`poi`]         | `PointOfInterest`, `PoiKind` + display table, `Sign`  |
//! | [`config`]      | `WayfindingConfig`, `DisplayConfig`, `WalkingSpeed`   |
//! | [`error`]       | `WfError`, `WfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public value types; required  |
//! |         | by the dataset and config loaders.                         |

pub mod access;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod poi;
pub mod projection;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use access::AccessMode;
pub use config::{CanvasSize, DisplayConfig, MapBounds, WalkingSpeed, WayfindingConfig};
pub use error::{WfError, WfResult};
pub use geo::Coordinate;
pub use ids::{EdgeId, NodeId};
pub use poi::{KindAttrs, Language, LocalizedName, PoiKind, PointOfInterest, Sign};
pub use projection::{DisplayPoint, GeoProjector};
