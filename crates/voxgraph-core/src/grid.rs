//! The [`Grid3`] type: a dense, owned voxel array of one element type.
//!
//! Label masks, scalar fields and component-id volumes are all `Grid3`s.
//! Storage is a flat `Vec<T>` in linear-index order (x fastest).

use crate::error::{Error, Result};
use crate::geom::{Point3, Shape};

/// A dense 3D array of `T` with a fixed [`Shape`].
///
/// The buffer always holds exactly `shape.len()` values, including after
/// deserialization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid3<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Copy> Grid3<T> {
    /// Create a grid of `shape` with every voxel set to `value`.
    ///
    /// # Panics
    ///
    /// If `shape.checked_len()` is `None`.
    pub fn new(shape: Shape, value: T) -> Self {
        assert!(shape.checked_len().is_some(), "shape {shape} is too large");
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Wrap a flat buffer. Fails unless it holds exactly one value per voxel.
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self> {
        let Some(len) = shape.checked_len() else {
            return Err(Error::ShapeTooLarge(shape));
        };
        if data.len() != len {
            return Err(Error::DataLength {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build a grid by evaluating `f` at every point.
    ///
    /// # Panics
    ///
    /// If `shape.checked_len()` is `None`.
    pub fn from_fn(shape: Shape, f: impl FnMut(Point3) -> T) -> Self {
        assert!(shape.checked_len().is_some(), "shape {shape} is too large");
        Self {
            shape,
            data: shape.iter().map(f).collect(),
        }
    }

    /// The grid's shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid holds no voxels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point3) -> Option<T> {
        self.shape.index(p).map(|i| self.data[i])
    }

    /// Set the value at `p`. No-op if `p` is outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point3, value: T) {
        if let Some(i) = self.shape.index(p) {
            self.data[i] = value;
        }
    }

    /// Fill every voxel with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Flat view in linear-index order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat view in linear-index order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid and return its flat buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// A new grid of the same shape with `f` applied to every value.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Grid3<U> {
        Grid3 {
            shape: self.shape,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Iterator over `(Point3, T)` pairs in linear-index order.
    pub fn iter(&self) -> impl Iterator<Item = (Point3, T)> + '_ {
        self.shape.iter().zip(self.data.iter().copied())
    }
}

impl<T: Copy + PartialEq> Grid3<T> {
    /// Number of voxels equal to `value`.
    pub fn count(&self, value: T) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Grid3<T>
where
    T: Copy + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Grid3")]
        struct Raw<T> {
            shape: Shape,
            data: Vec<T>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Grid3::from_vec(raw.shape, raw.data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_shape() {
        let g = Grid3::new(Shape::new(4, 3, 2), 0u8);
        assert_eq!(g.shape(), Shape::new(4, 3, 2));
        assert_eq!(g.len(), 24);
        assert!(!g.is_empty());
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid3::new(Shape::new(4, 4, 4), 0i32);
        let p = Point3::new(2, 3, 1);
        g.set(p, 42);
        assert_eq!(g.at(p), Some(42));
        assert_eq!(g.at(Point3::ZERO), Some(0));
        assert_eq!(g.at(Point3::new(4, 0, 0)), None);
        g.set(Point3::new(10, 10, 10), 7);
        assert_eq!(g.count(7), 0);
        assert_eq!(g.as_slice()[2 + 4 * (3 + 4)], 42);
    }

    #[test]
    fn from_vec_checks_length() {
        let s = Shape::planar(3, 2);
        assert!(Grid3::from_vec(s, vec![0.0f32; 6]).is_ok());
        assert_eq!(
            Grid3::from_vec(s, vec![0.0f32; 5]),
            Err(Error::DataLength {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn from_vec_rejects_oversized_shapes() {
        let s = Shape::new(Shape::MAX_AXIS + 1, 1, 1);
        assert_eq!(Grid3::from_vec(s, vec![0u8]), Err(Error::ShapeTooLarge(s)));
        let s = Shape::new(usize::MAX, 2, 1);
        assert_eq!(Grid3::<u8>::from_vec(s, Vec::new()), Err(Error::ShapeTooLarge(s)));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn new_panics_on_oversized_shape() {
        let _ = Grid3::new(Shape::new(Shape::MAX_AXIS, Shape::MAX_AXIS, Shape::MAX_AXIS), 0u8);
    }

    #[test]
    fn from_fn_and_iter_agree() {
        let g = Grid3::from_fn(Shape::new(3, 2, 2), |p| p.x + 10 * p.y + 100 * p.z);
        for (p, v) in g.iter() {
            assert_eq!(v, p.x + 10 * p.y + 100 * p.z);
        }
        assert_eq!(g.at(Point3::new(2, 1, 1)), Some(112));
    }

    #[test]
    fn fill_map_and_count() {
        let mut g = Grid3::new(Shape::new(5, 5, 1), 0u8);
        g.fill(1);
        assert_eq!(g.count(1), 25);
        g.set(Point3::ZERO, 2);
        assert_eq!(g.count(1), 24);
        let doubled = g.map(|v| v as u32 * 2);
        assert_eq!(doubled.count(2), 24);
        assert_eq!(doubled.count(4), 1);
        assert_eq!(doubled.shape(), g.shape());
    }
}
