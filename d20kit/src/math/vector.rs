use crate::types::*;

/// Below this length a vector is treated as having no direction at all.
const DEGENERATE_LENGTH: Real = 1e-12;

/// Scale `v` to unit length.
///
/// A zero-length (or near enough) vector has no direction to preserve,
/// so we divide by 1 instead and hand back the original vector. This
/// never produces NaN or infinite components.
pub fn normalize(v: &Vec3) -> Vec3 {
    let length = v.norm();
    let length = if length > DEGENERATE_LENGTH && length.is_finite() {
        length
    } else {
        1.0
    };
    v / length
}

pub fn centroid(a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    (a + b + c) * (1.0 / 3.0)
}

pub fn world_x() -> Vec3 {
    Vec3::new(1.0, 0.0, 0.0)
}

pub fn world_y() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

/// Direction from the die toward the viewer.
pub fn view_axis() -> Vec3 {
    Vec3::new(0.0, 0.0, 1.0)
}
