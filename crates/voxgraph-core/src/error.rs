//! The [`Error`] type shared by every voxgraph operation.

use std::fmt;

use crate::geom::{Point3, Shape};
use crate::volume::ElementKind;

/// Result alias for voxgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors detected before any search or scan begins.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A coordinate lies outside `[0, size)` on some axis.
    OutOfBounds { coord: Point3, shape: Shape },
    /// A coordinate has a different number of axes than the grid.
    DimensionMismatch { expected: usize, actual: usize },
    /// A weight is negative or NaN.
    InvalidWeight { index: usize, value: f64 },
    /// The grid's element type cannot be used as an edge weight.
    UnsupportedType(ElementKind),
    /// Two arrays that must share a shape do not.
    ShapeMismatch { expected: Shape, actual: Shape },
    /// A shape has an extent above `Shape::MAX_AXIS` or too many voxels to
    /// address.
    ShapeTooLarge(Shape),
    /// A flat buffer does not hold exactly one value per voxel.
    DataLength { expected: usize, actual: usize },
    /// A component id was found over two different original labels.
    LabelConflict { component: u32, index: usize },
    /// A tuning parameter is outside its allowed range.
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, shape } => {
                write!(f, "coordinate {coord} is outside grid of shape {shape}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "coordinate has {actual} axes but the grid has {expected}"
                )
            }
            Self::InvalidWeight { index, value } => {
                write!(f, "invalid weight {value} at voxel {index}: weights must be non-negative")
            }
            Self::UnsupportedType(kind) => {
                write!(f, "element type {kind} cannot be used as a weight")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, got {actual}")
            }
            Self::ShapeTooLarge(shape) => {
                write!(f, "shape {shape} is too large to allocate")
            }
            Self::DataLength { expected, actual } => {
                write!(f, "buffer holds {actual} values, shape needs {expected}")
            }
            Self::LabelConflict { component, index } => {
                write!(
                    f,
                    "component {component} covers more than one original label (voxel {index})"
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name} = {value}")
            }
        }
    }
}

impl std::error::Error for Error {}
