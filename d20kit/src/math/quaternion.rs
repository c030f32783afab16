//! Rotations as `nalgebra` quaternions.
//!
//! Composition is the Hamilton product (`a * b`), which rotates by
//! `b` first and then by `a`. We deliberately work with raw
//! `Quaternion` rather than `UnitQuaternion`: the near-parallel branch
//! of `slerp` is a plain component lerp that is only approximately
//! unit length.

use std::f64::consts::PI;

use super::vector::{normalize, world_x, world_y};
use crate::types::*;

/// Dot products below this mean the two directions are (nearly) opposite.
const ANTIPODAL_DOT: Real = -0.999_999;

/// Cosine of the half-angle above which `slerp` falls back to lerp.
const SLERP_LERP_THRESHOLD: Real = 0.9995;

pub fn identity() -> Quat {
    Quat::new(1.0, 0.0, 0.0, 0.0)
}

/// Hamilton product; "apply `b`, then `a`".
pub fn multiply(a: &Quat, b: &Quat) -> Quat {
    a * b
}

/// Rotation of `angle` radians about `axis`. The axis need not be unit length.
pub fn from_axis_angle(axis: &Vec3, angle: Real) -> Quat {
    let axis = normalize(axis);
    let half = angle / 2.0;
    Quat::from_parts(half.cos(), axis * half.sin())
}

/// Shortest-arc rotation taking direction `a` onto direction `b`.
pub fn from_to(a: &Vec3, b: &Vec3) -> Quat {
    let a = normalize(a);
    let b = normalize(b);
    let d = a.dot(&b);
    if d < ANTIPODAL_DOT {
        // Any axis perpendicular to `a` will do for a half turn;
        // start from world Y, or world X if `a` is too close to Y.
        let helper = if a.y.abs() > 0.9 { world_x() } else { world_y() };
        let axis = helper - a * a.dot(&helper);
        return from_axis_angle(&axis, PI);
    }
    let c = a.cross(&b);
    let s = ((1.0 + d) * 2.0).sqrt();
    Quat::from_parts(s / 2.0, c / s)
}

/// Rotate `v` by the unit quaternion `q`, i.e. `q * (v, 0) * q⁻¹`.
pub fn rotate(q: &Quat, v: &Vec3) -> Vec3 {
    // For unit quaternions the conjugate is the inverse.
    let rotated = q * Quat::from_imag(*v) * q.conjugate();
    rotated.imag()
}

/// Spherical interpolation along the shorter arc from `a` (`t = 0`)
/// to `b` (`t = 1`).
pub fn slerp(a: &Quat, b: &Quat, t: Real) -> Quat {
    let mut b = *b;
    let mut cos_half = a.coords.dot(&b.coords);
    if cos_half < 0.0 {
        b = -b;
        cos_half = -cos_half;
    }

    if cos_half > SLERP_LERP_THRESHOLD {
        // Too close for the sine weights to be stable.
        return a * (1.0 - t) + b * t;
    }

    let half = cos_half.acos();
    let sin_half = (1.0 - cos_half * cos_half).sqrt();
    let weight_a = ((1.0 - t) * half).sin() / sin_half;
    let weight_b = (t * half).sin() / sin_half;
    a * weight_a + b * weight_b
}
