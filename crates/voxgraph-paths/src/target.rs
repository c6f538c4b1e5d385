//! Field-guided target selection.

use voxgraph_core::{Grid3, Point3, Result};

use crate::traits::Label;

/// Return the foreground voxel of `mask` with the largest `field` value,
/// or `None` if `mask` has no foreground.
///
/// Voxels are visited with x outermost, then y, then z innermost. A later
/// voxel replaces the current best only if its value is strictly greater,
/// so the first maximum in that order wins ties. Values that do not compare
/// with themselves (NaN) never become the best; if every foreground value
/// is NaN, the first foreground voxel in that order is returned.
pub fn select_target<L, F>(mask: &Grid3<L>, field: &Grid3<F>) -> Result<Option<Point3>>
where
    L: Label,
    F: Copy + PartialOrd,
{
    let shape = mask.shape();
    shape.ensure_same(field.shape())?;
    if shape.is_empty() {
        return Ok(None);
    }

    let labels = mask.as_slice();
    let values = field.as_slice();
    let mut first: Option<Point3> = None;
    let mut best: Option<(Point3, F)> = None;

    for x in 0..shape.sx {
        for y in 0..shape.sy {
            for z in 0..shape.sz {
                let i = x + shape.sx * (y + shape.sy * z);
                if !labels[i].is_foreground() {
                    continue;
                }
                let p = Point3::new(x as i32, y as i32, z as i32);
                first.get_or_insert(p);
                let v = values[i];
                if v.partial_cmp(&v).is_none() {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((_, b)) => v > b,
                };
                if better {
                    best = Some((p, v));
                }
            }
        }
    }

    Ok(best.map(|(p, _)| p).or(first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxgraph_core::{Error, Shape};

    #[test]
    fn picks_maximum_foreground_voxel() {
        let shape = Shape::new(4, 4, 4);
        let field = Grid3::from_fn(shape, |p| (p.x + p.y + p.z) as f32);
        let mut mask = Grid3::new(shape, false);
        mask.set(Point3::new(1, 1, 1), true);
        mask.set(Point3::new(2, 0, 2), true);
        mask.set(Point3::new(0, 0, 1), true);
        // (3, 3, 3) has the largest value but is background.
        assert_eq!(
            select_target(&mask, &field).unwrap(),
            Some(Point3::new(2, 0, 2))
        );
    }

    #[test]
    fn ties_go_to_first_in_x_outer_order() {
        let shape = Shape::new(3, 3, 3);
        let mut field = Grid3::new(shape, 1.0f32);
        let mut mask = Grid3::new(shape, 0u8);
        // (0, 2, 2) comes before (1, 0, 0) when x is the outer loop,
        // though it comes later in linear-index order.
        for p in [Point3::new(1, 0, 0), Point3::new(0, 2, 2)] {
            mask.set(p, 1);
            field.set(p, 5.0);
        }
        assert_eq!(
            select_target(&mask, &field).unwrap(),
            Some(Point3::new(0, 2, 2))
        );
    }

    #[test]
    fn z_is_the_inner_loop() {
        let shape = Shape::new(2, 2, 3);
        let field = Grid3::new(shape, 7u16);
        let mut mask = Grid3::new(shape, 0u8);
        mask.set(Point3::new(0, 1, 0), 1);
        mask.set(Point3::new(0, 0, 2), 1);
        assert_eq!(
            select_target(&mask, &field).unwrap(),
            Some(Point3::new(0, 0, 2))
        );
    }

    #[test]
    fn no_foreground_is_none() {
        let shape = Shape::new(3, 3, 3);
        let mask = Grid3::new(shape, false);
        let field = Grid3::new(shape, 1.0f64);
        assert_eq!(select_target(&mask, &field).unwrap(), None);
    }

    #[test]
    fn infinite_values_still_select_first_foreground() {
        let shape = Shape::planar(3, 1);
        let field = Grid3::new(shape, f32::NEG_INFINITY);
        let mut mask = Grid3::new(shape, 0u8);
        mask.set(Point3::new(1, 0, 0), 1);
        mask.set(Point3::new(2, 0, 0), 1);
        assert_eq!(
            select_target(&mask, &field).unwrap(),
            Some(Point3::new(1, 0, 0))
        );
    }

    #[test]
    fn nan_does_not_hide_the_maximum() {
        let shape = Shape::new(3, 1, 1);
        let field = Grid3::from_vec(shape, vec![f64::NAN, 1.0, 9.0]).unwrap();
        let mask = Grid3::new(shape, true);
        assert_eq!(
            select_target(&mask, &field).unwrap(),
            Some(Point3::new(2, 0, 0))
        );
    }

    #[test]
    fn nan_after_the_maximum_is_ignored() {
        let shape = Shape::new(3, 1, 1);
        let field = Grid3::from_vec(shape, vec![2.0f32, 5.0, f32::NAN]).unwrap();
        let mask = Grid3::new(shape, 1u8);
        assert_eq!(
            select_target(&mask, &field).unwrap(),
            Some(Point3::new(1, 0, 0))
        );
    }

    #[test]
    fn all_nan_falls_back_to_first_foreground() {
        let shape = Shape::new(3, 1, 1);
        let field = Grid3::new(shape, f32::NAN);
        let mut mask = Grid3::new(shape, false);
        mask.set(Point3::new(1, 0, 0), true);
        mask.set(Point3::new(2, 0, 0), true);
        assert_eq!(
            select_target(&mask, &field).unwrap(),
            Some(Point3::new(1, 0, 0))
        );
    }

    #[test]
    fn shape_mismatch() {
        let mask = Grid3::new(Shape::new(3, 3, 3), true);
        let field = Grid3::new(Shape::new(3, 3, 2), 0.0f32);
        assert!(matches!(
            select_target(&mask, &field),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
