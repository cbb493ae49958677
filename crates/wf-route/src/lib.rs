//! `wf-route`: turn a visitor position and a destination into a drawable
//! route.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`service`] | `RouteService<P>`: snap, plan, project                           |
//! | [`result`]  | `RouteResult`: display points, distance, walk time               |
//! | [`filter`]  | `PoiFilter`: kind / accessibility filtering of destinations      |
//! | [`nearby`]  | `nearest_pois`: straight-line ranking of candidate destinations   |
//! | [`config`]  | JSON loading of `WayfindingConfig`                                |
//! | [`error`]   | `RouteError`                                                      |
//!
//! # Routing model
//!
//! 1. Origin and destination are snapped to their nearest graph nodes.
//! 2. A pluggable [`PathPlanner`][wf_spatial::PathPlanner] finds the shortest
//!    node path under the requested [`AccessMode`][wf_core::AccessMode].
//! 3. The display line runs from the **true** origin through every path node
//!    to the **true** destination, so it touches the points the visitor asked
//!    about rather than the snapped nodes.
//! 4. Total distance is the path length plus both snap distances.  When the
//!    nearest node is not on the best route this overestimates slightly; that
//!    is accepted for a graph-based router.
//!
//! Every call recomputes from scratch.  Callers issuing overlapping requests
//! should keep only the result of the latest one.

pub mod config;
pub mod error;
pub mod filter;
pub mod nearby;
pub mod result;
pub mod service;


pub use config::{config_from_str, load_config_json};
pub use error::RouteError;
pub use filter::PoiFilter;
pub use nearby::nearest_pois;
pub use result::RouteResult;
pub use service::RouteService;
