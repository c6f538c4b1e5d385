//! Single-source distance fields.

use voxgraph_core::{Coord, Error, Grid3, Point3, Result, Volume};

use crate::search::Search;
use crate::traits::{Weight, validate_weights, with_weights};

/// Compute the shortest distance from `source` to every voxel of `grid`.
///
/// Dijkstra is run to exhaustion under 26-connectivity, with moving onto a
/// voxel costing that voxel's weight. The result has the same shape as
/// `grid` (2D in, 2D out). `source` holds 0; voxels cut off by infinite
/// weights hold `+inf`. Distances are `f64`, the same precision
/// [`path_cost`](crate::path_cost) sums in.
pub fn distance_field(grid: &Volume, source: impl Into<Coord>) -> Result<Grid3<f64>> {
    let kind = grid.kind();
    if !kind.is_numeric() {
        return Err(Error::UnsupportedType(kind));
    }
    let shape = grid.shape();
    if shape.is_empty() {
        return Ok(Grid3::new(shape, 0.0));
    }
    let source = shape.resolve(source)?;
    with_weights!(grid, g => field_in(g, source))
}

fn field_in<T: Weight>(grid: &Grid3<T>, source: Point3) -> Result<Grid3<f64>> {
    validate_weights(grid.as_slice())?;
    let shape = grid.shape();
    let Some(si) = shape.index(source) else {
        return Err(Error::OutOfBounds {
            coord: source,
            shape,
        });
    };

    let mut search = Search::new(grid, si, false);
    search.run(None);
    log::debug!(
        "distance_field: settled {} of {} voxels from {source}",
        search.popped,
        shape.len()
    );
    Grid3::from_vec(shape, search.dist)
}
