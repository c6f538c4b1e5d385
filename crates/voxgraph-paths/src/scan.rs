//! Deterministic foreground lookup.

use voxgraph_core::{Grid3, Point3};

use crate::traits::Label;

/// Return the first foreground voxel of `mask`, scanning z, then y, then x
/// ascending (x fastest), or `None` if the mask has no foreground.
///
/// The first match is the one with the smallest z, then smallest y, then
/// smallest x, which makes it usable as a reproducible root.
pub fn first_foreground<L: Label>(mask: &Grid3<L>) -> Option<Point3> {
    let i = mask.as_slice().iter().position(|v| v.is_foreground())?;
    Some(mask.shape().point(i))
}
