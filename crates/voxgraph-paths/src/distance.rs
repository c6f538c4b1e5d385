use voxgraph_core::Point3;

/// Chebyshev (L∞) distance between two voxels.
#[inline]
pub fn chebyshev(a: Point3, b: Point3) -> i32 {
    (a.x - b.x)
        .abs()
        .max((a.y - b.y).abs())
        .max((a.z - b.z).abs())
}

/// Squared Euclidean distance between two voxels, with each axis scaled by
/// the physical voxel size in `anisotropy`.
#[inline]
pub fn squared_euclidean(a: Point3, b: Point3, anisotropy: [f64; 3]) -> f64 {
    let dx = (a.x - b.x) as f64 * anisotropy[0];
    let dy = (a.y - b.y) as f64 * anisotropy[1];
    let dz = (a.z - b.z) as f64 * anisotropy[2];
    dx * dx + dy * dy + dz * dz
}
