//! Vector and quaternion algebra.
//!
//! Vectors are plain `nalgebra` vectors, so addition, subtraction,
//! scaling, dot and cross products and length come straight from
//! there. What lives here is the handful of operations whose
//! degenerate cases we need to pin down ourselves.

pub mod quaternion;
pub mod vector;

pub use self::vector::{centroid, normalize, view_axis, world_x, world_y};
