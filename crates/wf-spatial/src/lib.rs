//! `wf-spatial`: venue path graph, snapping, and path planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `VenueGraph` (edge list + filtered CSR), `VenueGraphBuilder`|
//! | [`locator`] | `nearest_node`, `Snap`                                      |
//! | [`planner`] | `PathPlanner` trait, `NodePath`, `DijkstraPlanner`, `HeapDijkstraPlanner` |
//! | [`dataset`] | `Venue`, JSON dataset loading                               |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |

pub mod dataset;
pub mod error;
pub mod locator;
pub mod network;
pub mod planner;


pub use dataset::{Venue, load_venue_json, load_venue_reader, load_venue_str};
pub use error::{SpatialError, SpatialResult};
pub use locator::{Snap, nearest_node};
pub use network::{Adjacency, VenueGraph, VenueGraphBuilder};
pub use planner::{DijkstraPlanner, HeapDijkstraPlanner, NodePath, PathPlanner};
