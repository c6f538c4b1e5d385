//! Geometry primitives: [`Point3`], [`Coord`] and [`Shape`].
//!
//! Voxels are addressed by integer `(x, y, z)` with `x` varying fastest in
//! the linear index `i = x + sx * (y + sy * z)`. A 2D grid is a [`Shape`]
//! with `sz == 1` that remembers it was built from two axes.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Point3
// ---------------------------------------------------------------------------

/// A 3D integer voxel coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return a point shifted by (dx, dy, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl PartialOrd for Point3 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Points order like their linear index: z, then y, then x.
impl Ord for Point3 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z
            .cmp(&other.z)
            .then(self.y.cmp(&other.y))
            .then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<(i32, i32, i32)> for Point3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A caller-supplied coordinate, before it has been checked against a grid.
///
/// The number of axes must match the grid it is resolved against: planar
/// coordinates address 2D grids, volumetric ones address 3D grids.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coord {
    Planar([i32; 2]),
    Volumetric([i32; 3]),
}

impl Coord {
    /// Number of axes.
    #[inline]
    pub fn ndim(self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Volumetric(_) => 3,
        }
    }

    /// The coordinate with a zero depth appended to planar input.
    #[inline]
    pub fn promote(self) -> Point3 {
        match self {
            Self::Planar([x, y]) => Point3::new(x, y, 0),
            Self::Volumetric([x, y, z]) => Point3::new(x, y, z),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planar([x, y]) => write!(f, "({x}, {y})"),
            Self::Volumetric([x, y, z]) => write!(f, "({x}, {y}, {z})"),
        }
    }
}

impl From<[i32; 2]> for Coord {
    fn from(c: [i32; 2]) -> Self {
        Self::Planar(c)
    }
}

impl From<[i32; 3]> for Coord {
    fn from(c: [i32; 3]) -> Self {
        Self::Volumetric(c)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::Planar([x, y])
    }
}

impl From<(i32, i32, i32)> for Coord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::Volumetric([x, y, z])
    }
}

impl From<Point3> for Coord {
    fn from(p: Point3) -> Self {
        Self::Volumetric([p.x, p.y, p.z])
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Dimensions of a dense voxel grid.
///
/// Two shapes are equal when their three extents agree, so a planar
/// `(sx, sy)` shape compares equal to the volumetric `(sx, sy, 1)`.
///
/// A shape can back a [`Grid3`](crate::Grid3) only if every extent is at
/// most [`Shape::MAX_AXIS`] and the voxel count fits in `usize`; see
/// [`Shape::checked_len`].
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
    planar: bool,
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims()
    }
}

impl Eq for Shape {}

impl Shape {
    /// Largest extent along any axis, so every coordinate fits in an `i32`.
    pub const MAX_AXIS: usize = i32::MAX as usize;

    /// A volumetric shape.
    #[inline]
    pub const fn new(sx: usize, sy: usize, sz: usize) -> Self {
        Self {
            sx,
            sy,
            sz,
            planar: false,
        }
    }

    /// A 2D shape, stored as a unit-depth volume.
    #[inline]
    pub const fn planar(sx: usize, sy: usize) -> Self {
        Self {
            sx,
            sy,
            sz: 1,
            planar: true,
        }
    }

    /// `(sx, sy, sz)`.
    #[inline]
    pub const fn dims(self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    /// Number of axes the caller sees: 2 for planar shapes, else 3.
    #[inline]
    pub const fn ndim(self) -> usize {
        if self.planar { 2 } else { 3 }
    }

    /// Whether this shape was created from two axes.
    #[inline]
    pub const fn is_planar(self) -> bool {
        self.planar
    }

    /// Total number of voxels.
    ///
    /// Only meaningful for shapes accepted by [`checked_len`](Self::checked_len),
    /// which every grid's shape is.
    #[inline]
    pub const fn len(self) -> usize {
        self.sx * self.sy * self.sz
    }

    /// Total number of voxels, or `None` if an extent exceeds
    /// [`MAX_AXIS`](Self::MAX_AXIS) or the product overflows `usize`.
    pub const fn checked_len(self) -> Option<usize> {
        if self.sx > Self::MAX_AXIS || self.sy > Self::MAX_AXIS || self.sz > Self::MAX_AXIS {
            return None;
        }
        match self.sx.checked_mul(self.sy) {
            Some(plane) => plane.checked_mul(self.sz),
            None => None,
        }
    }

    /// Whether any axis has zero extent.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.sx == 0 || self.sy == 0 || self.sz == 0
    }

    /// Whether `p` lies inside `[0, size)` on every axis.
    #[inline]
    pub fn contains(self, p: Point3) -> bool {
        p.x >= 0
            && p.y >= 0
            && p.z >= 0
            && (p.x as usize) < self.sx
            && (p.y as usize) < self.sy
            && (p.z as usize) < self.sz
    }

    /// Linear index of `p`, or `None` if it is outside the shape.
    #[inline]
    pub fn index(self, p: Point3) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize + self.sx * (p.y as usize + self.sy * p.z as usize))
    }

    /// Coordinate of linear index `i`. `i` must be `< len()`; the axis limit
    /// keeps the result exact.
    #[inline]
    pub fn point(self, i: usize) -> Point3 {
        let x = i % self.sx;
        let y = (i / self.sx) % self.sy;
        let z = i / (self.sx * self.sy);
        Point3::new(x as i32, y as i32, z as i32)
    }

    /// Check a caller coordinate against this shape.
    ///
    /// The coordinate must have as many axes as the shape and lie within it.
    pub fn resolve(self, coord: impl Into<Coord>) -> Result<Point3> {
        let coord = coord.into();
        if coord.ndim() != self.ndim() {
            return Err(Error::DimensionMismatch {
                expected: self.ndim(),
                actual: coord.ndim(),
            });
        }
        let p = coord.promote();
        if !self.contains(p) {
            return Err(Error::OutOfBounds { coord: p, shape: self });
        }
        Ok(p)
    }

    /// Fail with [`Error::ShapeMismatch`] unless `other` equals `self`.
    #[inline]
    pub fn ensure_same(self, other: Shape) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                expected: self,
                actual: other,
            })
        }
    }

    /// Iterator over every point in linear-index order (z, y, x).
    #[inline]
    pub fn iter(self) -> ShapeIter {
        ShapeIter {
            shape: self,
            next: 0,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.planar {
            write!(f, "{}x{}", self.sx, self.sy)
        } else {
            write!(f, "{}x{}x{}", self.sx, self.sy, self.sz)
        }
    }
}

impl IntoIterator for Shape {
    type Item = Point3;
    type IntoIter = ShapeIter;
    #[inline]
    fn into_iter(self) -> ShapeIter {
        self.iter()
    }
}

/// Iterator over the points of a [`Shape`], x fastest.
#[derive(Clone, Debug)]
pub struct ShapeIter {
    shape: Shape,
    next: usize,
}

impl Iterator for ShapeIter {
    type Item = Point3;

    #[inline]
    fn next(&mut self) -> Option<Point3> {
        if self.next >= self.shape.len() {
            return None;
        }
        let p = self.shape.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.shape.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for ShapeIter {}
