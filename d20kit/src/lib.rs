/*!
# d20kit

A twenty-sided die you can roll on any 2D drawing surface.

The die is a fixed icosahedral mesh, rotated by a single quaternion,
projected with a fixed perspective camera and drawn back to front
(painter's algorithm; there is no depth buffer). Rolling it plays a
scripted tumble: a spherical interpolation from a random orientation
to one that shows the chosen face to the camera, with a decaying free
spin on top. Every roll finishes by snapping exactly onto that target.


## High-level design

[`RollEngine`] owns everything that changes over time: the orientation,
the roll in flight, the viewport and the theme colour. It never reads a
clock; the host calls [`RollEngine::advance`] once per frame with the
current time and draws the result onto anything implementing
[`render::DrawSurface`]. Randomness is injected, so a seeded engine
replays the same rolls.

Use [`EngineBuilder`] to put one together.
*/

extern crate nalgebra as na;
extern crate rand;
extern crate rand_xoshiro;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate slog;
extern crate slog_async;
extern crate slog_term;
extern crate thiserror;

#[cfg(test)]
#[macro_use]
extern crate approx;
#[cfg(test)]
extern crate itertools;

pub mod die;
pub mod math;
pub mod render;
pub mod roll;
pub mod settings;
pub mod theme;
pub mod types;

mod engine_builder;
mod error;

pub use crate::engine_builder::EngineBuilder;
pub use crate::error::ConfigError;
pub use crate::roll::{Outcome, Progress, RollEngine};
pub use crate::settings::Settings;

#[cfg(test)]
mod integration_tests;
