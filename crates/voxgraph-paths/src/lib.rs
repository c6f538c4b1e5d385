//! Weighted graph search over dense 3D voxel grids.
//!
//! This crate provides the numeric core of a TEASAR-style skeletonization
//! loop. Every voxel is a graph node joined to its 26 neighbors, and moving
//! onto a voxel costs that voxel's weight.
//!
//! - **Shortest path** between two voxels ([`shortest_path`], [`path_cost`])
//! - **Distance field** from one voxel to all others ([`distance_field`])
//! - **Root selection** by deterministic scan ([`first_foreground`])
//! - **Target selection** by field maximum ([`select_target`])
//! - **Invalidation-ball erosion** along a path ([`erode_along_path`],
//!   [`erode_along_path_with`])
//! - **Label reconciliation** after connected-component labelling
//!   ([`reconcile_labels`], [`reconcile_labels_strict`])
//! - **Centerline penalty weights** from a distance-to-boundary field
//!   ([`penalty_weights`])
//!
//! All functions are synchronous and keep no state between calls. Inputs are
//! validated before any search begins.
//!
//! # Element types
//!
//! | Trait | Implemented for | Used by |
//! |---|---|---|
//! | [`Weight`] | `u8`..`u64`, `i8`..`i64`, `f32`, `f64` | shortest path, distance field |
//! | [`Label`] | `bool`, `u8`..`u64`, `i8`..`i64` | scanner, target selector, eroder |

mod dijkstra;
mod distance;
mod erode;
mod field;
mod neighbors;
mod penalty;
mod reconcile;
mod scan;
mod search;
mod target;
mod traits;

pub use dijkstra::{path_cost, shortest_path};
pub use distance::{chebyshev, squared_euclidean};
pub use erode::{ErosionParams, erode_along_path, erode_along_path_with};
pub use field::distance_field;
pub use neighbors::Neighbors;
pub use penalty::{PenaltyParams, penalty_weights};
pub use reconcile::{reconcile_labels, reconcile_labels_strict};
pub use scan::first_foreground;
pub use target::select_target;
pub use traits::{Label, Weight};
