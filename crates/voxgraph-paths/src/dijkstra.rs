use voxgraph_core::{Coord, Error, Grid3, Point3, Result, Volume};

use crate::search::Search;
use crate::traits::{Weight, validate_weights, with_weights};

/// Compute the minimum-weight 26-connected path from `source` to `target`.
///
/// Moving onto a voxel costs that voxel's weight. The returned path starts
/// at `source` and ends at `target`, both included. If `source == target`
/// the path is that single voxel; if `target` cannot be reached the path
/// is empty. The search stops as soon as `target` is settled.
///
/// Coordinates must have as many axes as `grid`. A zero-size grid of a
/// numeric kind returns an empty path without checking coordinates.
pub fn shortest_path(
    grid: &Volume,
    source: impl Into<Coord>,
    target: impl Into<Coord>,
) -> Result<Vec<Point3>> {
    let kind = grid.kind();
    if !kind.is_numeric() {
        return Err(Error::UnsupportedType(kind));
    }
    let shape = grid.shape();
    if shape.is_empty() {
        return Ok(Vec::new());
    }
    let source = shape.resolve(source)?;
    let target = shape.resolve(target)?;
    with_weights!(grid, g => path_in(g, source, target))
}

fn path_in<T: Weight>(grid: &Grid3<T>, source: Point3, target: Point3) -> Result<Vec<Point3>> {
    validate_weights(grid.as_slice())?;
    let shape = grid.shape();
    let (Some(si), Some(ti)) = (shape.index(source), shape.index(target)) else {
        return Err(Error::OutOfBounds {
            coord: target,
            shape,
        });
    };
    if si == ti {
        return Ok(vec![source]);
    }

    let mut search = Search::new(grid, si, true);
    if !search.run(Some(ti)) {
        log::debug!(
            "shortest_path: {target} unreachable from {source} after settling {} voxels",
            search.popped
        );
        return Ok(Vec::new());
    }
    let path = search.path_to(ti);
    log::debug!(
        "shortest_path: {} voxels, cost {}, settled {}",
        path.len(),
        search.dist[ti],
        search.popped
    );
    Ok(path)
}

/// Total weight of walking `path`: the sum of the weights of every voxel
/// after the first.
///
/// For a path returned by [`shortest_path`] this equals the
/// [`distance_field`](crate::distance_field) value at its last voxel.
pub fn path_cost(grid: &Volume, path: &[Point3]) -> Result<f64> {
    let shape = grid.shape();
    let mut indices = Vec::with_capacity(path.len());
    for &p in path {
        let i = shape
            .index(p)
            .ok_or(Error::OutOfBounds { coord: p, shape })?;
        indices.push(i);
    }
    with_weights!(grid, g => {
        let data = g.as_slice();
        Ok(indices.iter().skip(1).map(|&i| data[i].weight()).sum())
    })
}
