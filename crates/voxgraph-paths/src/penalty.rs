//! Boundary-penalizing edge weights (PDRF).
//!
//! Paths computed over these weights hug the centerline of an object:
//! voxels deep inside (large distance-to-boundary) are cheap, voxels near
//! the boundary are expensive, and background is impassable.

use voxgraph_core::Grid3;

/// Parameters of the boundary penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyParams {
    /// Weight added at the boundary.
    pub scale: f32,
    /// How sharply the penalty falls off toward the centerline.
    pub exponent: f32,
}

impl Default for PenaltyParams {
    fn default() -> Self {
        Self {
            scale: 100_000.0,
            exponent: 4.0,
        }
    }
}

/// Turn a distance-to-boundary field into edge weights.
///
/// Each voxel with `dbf > 0` gets
/// `scale * (1 - dbf / max(dbf)) ^ exponent + 1`; every other voxel gets
/// `+inf`. The result has the shape of `dbf` and can be wrapped in a
/// [`Volume`](voxgraph_core::Volume) for [`distance_field`](crate::distance_field)
/// or [`shortest_path`](crate::shortest_path).
pub fn penalty_weights<F>(dbf: &Grid3<F>, params: &PenaltyParams) -> Grid3<f32>
where
    F: Copy + Into<f64>,
{
    let max = dbf
        .as_slice()
        .iter()
        .map(|&d| Into::<f64>::into(d))
        .fold(0.0f64, f64::max);
    let scale = params.scale as f64;
    let exponent = params.exponent as f64;
    log::trace!("penalty_weights: max dbf {max}, scale {scale}, exponent {exponent}");

    dbf.map(|d| {
        let d: f64 = d.into();
        if !(d > 0.0) {
            return f32::INFINITY;
        }
        let depth = 1.0 - (d / max).min(1.0);
        (scale * depth.powf(exponent) + 1.0) as f32
    })
}
