//! **voxgraph-core** — core types for weighted voxel-graph search.
//!
//! This crate provides the data model shared across the *voxgraph*
//! workspace: voxel coordinates and shapes, owned dense grids, a
//! runtime-typed volume for weight inputs, and the common error type.

pub mod error;
pub mod geom;
pub mod grid;
pub mod volume;

pub use error::{Error, Result};
pub use geom::{Coord, Point3, Shape, ShapeIter};
pub use grid::Grid3;
pub use volume::{ElementKind, Volume};
