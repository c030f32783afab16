//! The twenty-sided die itself: a fixed icosahedral mesh with one
//! label per face.

mod icosahedron;
mod mesh;

pub use self::mesh::{face_normal, Face, Mesh};

/// Number of faces, and therefore the highest label.
pub const FACE_COUNT: usize = 20;

/// The label that signals a top-tier ("critical success") roll.
pub const CRITICAL_HIGH: u8 = 20;

/// The label that signals a bottom-tier ("critical failure") roll.
pub const CRITICAL_LOW: u8 = 1;

#[cfg(test)]
mod tests;
