//! Invalidation-ball erosion of a label mask along a path.
//!
//! After a skeleton path has been traced, every foreground voxel close
//! enough to the path is erased so the next target is found elsewhere. The
//! ball around each path point has a radius derived from a scalar field
//! (usually the distance-to-boundary field): `field[p] * scale + constant`,
//! measured in physical units when the voxels are anisotropic.

use voxgraph_core::{Error, Grid3, Point3, Result};

use crate::distance::squared_euclidean;
use crate::traits::Label;

/// Parameters of the invalidation ball.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErosionParams {
    /// Multiplier applied to the field value.
    pub scale: f32,
    /// Offset added after scaling.
    pub constant: f32,
    /// Physical size of a voxel along x, y and z. All must be positive.
    pub anisotropy: [f32; 3],
}

impl Default for ErosionParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            constant: 0.0,
            anisotropy: [1.0; 3],
        }
    }
}

impl ErosionParams {
    /// Unit-voxel parameters with the given `scale` and `constant`.
    pub fn new(scale: f32, constant: f32) -> Self {
        Self {
            scale,
            constant,
            ..Self::default()
        }
    }

    /// Same parameters with a physical voxel size.
    pub fn with_anisotropy(mut self, anisotropy: [f32; 3]) -> Self {
        self.anisotropy = anisotropy;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() {
            return Err(Error::InvalidParameter {
                name: "scale",
                value: self.scale as f64,
            });
        }
        if !self.constant.is_finite() {
            return Err(Error::InvalidParameter {
                name: "constant",
                value: self.constant as f64,
            });
        }
        for w in self.anisotropy {
            if !(w.is_finite() && w > 0.0) {
                return Err(Error::InvalidParameter {
                    name: "anisotropy",
                    value: w as f64,
                });
            }
        }
        Ok(())
    }
}

/// Erase foreground voxels within `field[p] * scale + constant` of each
/// point `p` of `path`, and return how many voxels were erased.
///
/// Equivalent to [`erode_along_path_with`] with unit anisotropy.
pub fn erode_along_path<L, F>(
    mask: &mut Grid3<L>,
    field: &Grid3<F>,
    path: &[Point3],
    scale: f32,
    constant: f32,
) -> Result<usize>
where
    L: Label,
    F: Copy + Into<f64>,
{
    erode_along_path_with(mask, field, path, &ErosionParams::new(scale, constant))
}

/// Erase foreground voxels inside the invalidation ball of every path
/// point, in path order, and return how many voxels were erased.
///
/// The caller lends `mask` exclusively for the duration of the call; it is
/// modified in place and voxels only ever go from foreground to background,
/// so each voxel is counted at most once. A voxel `v` is inside the ball of
/// `p` when its squared physical distance to `p` is at most `radius²`.
/// Negative radii erase nothing.
///
/// Shapes, parameters and every path point are checked before the mask is
/// touched, so on error the mask is unchanged.
pub fn erode_along_path_with<L, F>(
    mask: &mut Grid3<L>,
    field: &Grid3<F>,
    path: &[Point3],
    params: &ErosionParams,
) -> Result<usize>
where
    L: Label,
    F: Copy + Into<f64>,
{
    let shape = mask.shape();
    shape.ensure_same(field.shape())?;
    if shape.is_empty() {
        return Ok(0);
    }
    params.validate()?;
    for &p in path {
        if !shape.contains(p) {
            return Err(Error::OutOfBounds { coord: p, shape });
        }
    }
    log::trace!(
        "erode_along_path: {} points, scale {}, constant {}, anisotropy {:?}",
        path.len(),
        params.scale,
        params.constant,
        params.anisotropy
    );

    let anisotropy = params.anisotropy.map(f64::from);
    let labels = mask.as_mut_slice();
    let values = field.as_slice();
    let mut erased = 0;

    for &p in path {
        let Some(pi) = shape.index(p) else {
            continue;
        };
        let value: f64 = values[pi].into();
        let radius = value * params.scale as f64 + params.constant as f64;
        if !(radius >= 0.0) {
            continue;
        }
        let r2 = radius * radius;
        let (x0, x1) = ball_extent(p.x, radius, anisotropy[0], shape.sx);
        let (y0, y1) = ball_extent(p.y, radius, anisotropy[1], shape.sy);
        let (z0, z1) = ball_extent(p.z, radius, anisotropy[2], shape.sz);

        for z in z0..=z1 {
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let v = Point3::new(x as i32, y as i32, z as i32);
                    if squared_euclidean(v, p, anisotropy) > r2 {
                        continue;
                    }
                    let i = x + shape.sx * (y + shape.sy * z);
                    if labels[i].is_foreground() {
                        labels[i] = L::BACKGROUND;
                        erased += 1;
                    }
                }
            }
        }
    }

    log::debug!("erode_along_path: erased {erased} voxels along {} points", path.len());
    Ok(erased)
}

/// Inclusive range of indices covered on one axis by a ball of `radius`
/// centered at `c`, clipped to `[0, size)`.
///
/// The half-width is `ceil(radius / voxel + 0.5)`; the exact distance test
/// decides membership inside it.
fn ball_extent(c: i32, radius: f64, voxel: f64, size: usize) -> (usize, usize) {
    let half = (radius / voxel + 0.5).ceil() as i64;
    let lo = (c as i64).saturating_sub(half).max(0);
    let hi = (c as i64).saturating_add(half).min(size as i64 - 1);
    (lo as usize, hi as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxgraph_core::Shape;

    fn full(shape: Shape) -> Grid3<u8> {
        Grid3::new(shape, 1)
    }

    #[test]
    fn single_point_radius_two() {
        let shape = Shape::new(9, 9, 9);
        let center = Point3::new(4, 4, 4);
        let mut mask = full(shape);
        let mut field = Grid3::new(shape, 0.0f32);
        field.set(center, 2.0);

        let erased = erode_along_path(&mut mask, &field, &[center], 1.0, 0.0).unwrap();

        let mut expect = 0;
        for (p, v) in mask.iter() {
            let d = p - center;
            let d2 = d.x * d.x + d.y * d.y + d.z * d.z;
            if d2 <= 4 {
                expect += 1;
                assert_eq!(v, 0, "{p} should be erased");
            } else {
                assert_eq!(v, 1, "{p} should remain");
            }
        }
        assert_eq!(erased, expect);
        // exactly 2.0 away
        assert_eq!(mask.at(Point3::new(6, 4, 4)), Some(0));
        // sqrt(5) away
        assert_eq!(mask.at(Point3::new(6, 5, 4)), Some(1));
    }

    #[test]
    fn second_pass_erases_nothing() {
        let shape = Shape::new(8, 8, 8);
        let mut mask = full(shape);
        let field = Grid3::new(shape, 1.5f64);
        let path = [Point3::new(1, 1, 1), Point3::new(2, 2, 2), Point3::new(3, 3, 3)];
        let first = erode_along_path(&mut mask, &field, &path, 1.0, 0.5).unwrap();
        assert!(first > 0);
        assert_eq!(mask.count(0), first);
        let second = erode_along_path(&mut mask, &field, &path, 1.0, 0.5).unwrap();
        assert_eq!(second, 0);
    }

    #[test]
    fn overlapping_balls_count_once() {
        let shape = Shape::new(10, 3, 3);
        let mut mask = Grid3::new(shape, true);
        let field = Grid3::new(shape, 1.0f32);
        let path: Vec<Point3> = (0..10).map(|x| Point3::new(x, 1, 1)).collect();
        let erased = erode_along_path(&mut mask, &field, &path, 1.0, 0.0).unwrap();
        // Radius 1 along the whole axis covers the center line and its
        // four face neighbors on every slice.
        assert_eq!(erased, 10 * 5);
        assert_eq!(mask.count(false), erased);
    }

    #[test]
    fn background_is_not_counted() {
        let shape = Shape::new(5, 5, 5);
        let mut mask = Grid3::new(shape, 0u8);
        mask.set(Point3::new(2, 2, 2), 1);
        mask.set(Point3::new(0, 0, 0), 1);
        let field = Grid3::new(shape, 1.0f32);
        let erased = erode_along_path(&mut mask, &field, &[Point3::new(2, 2, 2)], 2.0, 0.0).unwrap();
        assert_eq!(erased, 1);
        assert_eq!(mask.at(Point3::ZERO), Some(1));
    }

    #[test]
    fn constant_only_radius() {
        let shape = Shape::planar(7, 7);
        let mut mask = Grid3::new(shape, 1i32);
        let field = Grid3::new(shape, 100.0f32);
        let erased = erode_along_path(&mut mask, &field, &[Point3::new(3, 3, 0)], 0.0, 1.0).unwrap();
        assert_eq!(erased, 5);
    }

    #[test]
    fn negative_radius_erases_nothing() {
        let shape = Shape::new(4, 4, 4);
        let mut mask = full(shape);
        let field = Grid3::new(shape, 3.0f32);
        let erased = erode_along_path(&mut mask, &field, &[Point3::new(1, 1, 1)], -1.0, 0.0).unwrap();
        assert_eq!(erased, 0);
        assert_eq!(mask.count(1), 64);
    }

    #[test]
    fn anisotropy_shrinks_ball_along_coarse_axis() {
        let shape = Shape::new(9, 9, 9);
        let center = Point3::new(4, 4, 4);
        let mut mask = full(shape);
        let field = Grid3::new(shape, 4.0f32);
        let params = ErosionParams::new(1.0, 0.0).with_anisotropy([1.0, 1.0, 4.0]);
        erode_along_path_with(&mut mask, &field, &[center], &params).unwrap();
        assert_eq!(mask.at(Point3::new(8, 4, 4)), Some(0));
        assert_eq!(mask.at(Point3::new(4, 4, 5)), Some(0));
        assert_eq!(mask.at(Point3::new(4, 4, 6)), Some(1));
    }

    #[test]
    fn rejects_bad_input_without_touching_mask() {
        let shape = Shape::new(4, 4, 4);
        let mut mask = full(shape);
        let field = Grid3::new(shape, 1.0f32);
        let path = [Point3::new(1, 1, 1), Point3::new(4, 0, 0)];
        assert!(matches!(
            erode_along_path(&mut mask, &field, &path, 1.0, 0.0),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(mask.count(1), 64);

        let small = Grid3::new(Shape::new(4, 4, 3), 1.0f32);
        assert!(matches!(
            erode_along_path(&mut mask, &small, &path[..1], 1.0, 0.0),
            Err(Error::ShapeMismatch { .. })
        ));

        let params = ErosionParams::default().with_anisotropy([1.0, 0.0, 1.0]);
        assert!(matches!(
            erode_along_path_with(&mut mask, &field, &path[..1], &params),
            Err(Error::InvalidParameter { name: "anisotropy", .. })
        ));
        assert_eq!(mask.count(1), 64);
    }

    #[test]
    fn zero_size_mask() {
        let shape = Shape::new(0, 2, 2);
        let mut mask: Grid3<u8> = Grid3::new(shape, 1);
        let field = Grid3::new(shape, 1.0f32);
        assert_eq!(
            erode_along_path(&mut mask, &field, &[Point3::new(5, 5, 5)], 1.0, 0.0).unwrap(),
            0
        );
    }
}
