//! Rolling the die: a scripted tumble from a random orientation
//! to one that shows the chosen face to the camera.

mod engine;
mod state;

pub use self::engine::{face_target, Frame, Progress, RollEngine};
pub use self::state::{ease_out_cubic, Outcome, Phase, Roll, RollState};
