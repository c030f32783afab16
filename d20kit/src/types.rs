use crate::na;

// Common types for all of d20kit.
//
// Everything geometric is `f64`; the mesh is tiny, and the
// extra precision keeps the final snap to the target pose exact
// enough that repeated rolls never drift.
pub type Real = f64;

pub type Vec3 = na::Vector3<f64>;
pub type Quat = na::Quaternion<f64>;

/// Milliseconds, as handed to us by the host's frame clock.
pub type TimeMs = f64;

/// An RGB triple, 0-255 per channel.
pub type Rgb = [u8; 3];

/// A point on the drawing surface, in device pixels.
pub type Pt2 = na::Point2<f64>;
