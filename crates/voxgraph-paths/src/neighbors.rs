use voxgraph_core::{Point3, Shape};

/// Cached neighbor computation helper.
///
/// Enumerates the 26-connected neighborhood (3x3x3 minus the center) of a
/// voxel, filtered by a predicate. Order is fixed: `dz`, then `dy`, then
/// `dx`, each from -1 to 1.
pub struct Neighbors {
    buf: Vec<Point3>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(26),
        }
    }

    /// Return the 26-connected neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn all(&mut self, p: Point3, keep: impl Fn(Point3) -> bool) -> &[Point3] {
        self.buf.clear();
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    let n = p.shift(dx, dy, dz);
                    if keep(n) {
                        self.buf.push(n);
                    }
                }
            }
        }
        &self.buf
    }

    /// Return the 26-connected neighbors of `p` that lie inside `shape`.
    /// Boundary voxels get fewer neighbors; nothing wraps.
    #[inline]
    pub fn within(&mut self, p: Point3, shape: Shape) -> &[Point3] {
        self.all(p, |n| shape.contains(n))
    }
}
