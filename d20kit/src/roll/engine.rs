use std::f64::consts::PI;

use rand::Rng;
use slog::Logger;

use super::state::{Outcome, Phase, Roll, RollState};
use crate::die::{Mesh, CRITICAL_HIGH, FACE_COUNT};
use crate::math::quaternion::{from_axis_angle, from_to, identity, multiply};
use crate::math::{normalize, view_axis, world_x, world_y};
use crate::render::{render_items, DrawSurface, RenderItem, Renderer, Viewport};
use crate::settings::Settings;
use crate::theme::{parse_color, Theme};
use crate::types::*;

/// Orientation that turns a face with outward normal `normal` toward
/// the camera, then spins it by `spin` radians about the view axis.
///
/// The spin leaves the face pointing at the camera; it only changes
/// which way up it reads.
pub fn face_target(normal: &Vec3, spin: Real) -> Quat {
    let to_camera = from_to(normal, &view_axis());
    let about_view_axis = from_axis_angle(&view_axis(), spin);
    multiply(&about_view_axis, &to_camera)
}

/// Where a roll is after an `advance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    Idle,
    /// Fraction of the roll's duration elapsed, in `[0, 1)`.
    Rolling(Real),
    /// The roll just finished; reported exactly once per roll.
    Settled(Outcome),
}

/// Result of advancing the engine by one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub progress: Progress,
    /// The die as it should be drawn this frame, back to front.
    pub items: Vec<RenderItem>,
}

/// Owns one die and everything about its current pose.
///
/// The engine never looks at a clock or schedules anything itself.
/// The host calls `advance` (or `step`) once per frame with the current
/// time, and draws the result whenever it likes. Only one roll is ever
/// in flight; triggering another meanwhile does nothing.
pub struct RollEngine<R> {
    log: Logger,
    settings: Settings,
    rng: R,
    mesh: Mesh,
    renderer: Renderer,
    viewport: Viewport,
    theme: Theme,
    orientation: Quat,
    state: RollState,
    last_outcome: Option<Outcome>,
}

impl<R: Rng> RollEngine<R> {
    /// `settings` are assumed valid; see `Settings::validate`.
    pub fn new(parent_log: &Logger, settings: Settings, viewport: Viewport, rng: R) -> RollEngine<R> {
        let log = parent_log.new(o!("system" => "roll"));
        let renderer = Renderer::new(parent_log, &settings);
        let theme = Theme::new(settings.theme_color);
        let mut engine = RollEngine {
            log,
            settings,
            rng,
            mesh: Mesh::d20(),
            renderer,
            viewport,
            theme,
            orientation: identity(),
            state: RollState::Idle,
            last_outcome: None,
        };
        // Start out showing the top face, as if it had just been rolled.
        engine.orientation = engine.random_target_for(CRITICAL_HIGH);
        engine
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &RollState {
        &self.state
    }

    /// Outcome of the most recently finished roll.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Start a roll with a uniformly random outcome.
    ///
    /// Returns `false`, and changes nothing, if a roll is already in flight.
    pub fn roll(&mut self) -> bool {
        if self.ignore_while_rolling() {
            return false;
        }
        let value = self.rng.gen_range(1..=FACE_COUNT as u8);
        self.start_roll(value)
    }

    /// Start a roll that will land on `value`.
    ///
    /// Returns `false`, and changes nothing, if a roll is already in
    /// flight or `value` isn't a label on the die.
    pub fn roll_to(&mut self, value: u8) -> bool {
        if self.ignore_while_rolling() {
            return false;
        }
        if self.mesh.face_for_label(value).is_none() {
            warn!(self.log, "Ignoring roll to a value the die doesn't have"; "value" => value);
            return false;
        }
        self.start_roll(value)
    }

    fn ignore_while_rolling(&self) -> bool {
        let rolling = self.phase() == Phase::Rolling;
        if rolling {
            debug!(self.log, "Ignoring roll; already rolling");
        }
        rolling
    }

    fn start_roll(&mut self, value: u8) -> bool {
        let target = self.random_target_for(value);

        let start = multiply(
            &from_axis_angle(&world_x(), self.rng.gen::<Real>() * PI * 2.0),
            &from_axis_angle(&world_y(), self.rng.gen::<Real>() * PI * 2.0),
        );

        let spin_axis = normalize(&Vec3::new(
            self.rng.gen::<Real>() - 0.5,
            self.rng.gen::<Real>() - 0.5,
            self.rng.gen::<Real>() - 0.5,
        ));

        let roll = Roll::new(
            start,
            target,
            spin_axis,
            self.settings.spin_total,
            self.settings.roll_duration,
            Outcome::new(value),
        );
        debug!(self.log, "Starting roll";
            "value" => value,
            "duration_ms" => roll.duration
        );
        self.state = RollState::Rolling(roll);
        true
    }

    // Camera-facing orientation for the face labelled `value`, with a
    // random twist so repeated rolls of the same value don't look identical.
    fn random_target_for(&mut self, value: u8) -> Quat {
        let normal = match self.mesh.face_for_label(value) {
            Some(face) => face.normal,
            None => return self.orientation,
        };
        let spin = self.rng.gen::<Real>() * PI * 2.0;
        face_target(&normal, spin)
    }

    /// Move the animation on to time `now` (milliseconds, any epoch).
    ///
    /// The first call after a roll is triggered fixes its start time.
    /// When the roll's duration has elapsed the orientation snaps to the
    /// exact target and the outcome is reported, once.
    pub fn advance(&mut self, now: TimeMs) -> Frame {
        let progress = match &mut self.state {
            RollState::Idle => Progress::Idle,
            RollState::Rolling(roll) => {
                let t = roll.advance(now);
                self.orientation = roll.orientation_at(t);
                if t < 1.0 {
                    Progress::Rolling(t)
                } else {
                    self.settle()
                }
            }
        };
        Frame {
            progress,
            items: self.render_items(),
        }
    }

    fn settle(&mut self) -> Progress {
        match std::mem::take(&mut self.state) {
            RollState::Rolling(roll) => {
                // Snap; no residual interpolation or spin error.
                self.orientation = roll.target;
                self.last_outcome = Some(roll.outcome);
                info!(self.log, "Roll settled";
                    "value" => roll.outcome.value,
                    "critical_high" => roll.outcome.critical_high,
                    "critical_low" => roll.outcome.critical_low
                );
                Progress::Settled(roll.outcome)
            }
            RollState::Idle => Progress::Idle,
        }
    }

    /// The die at its current orientation, back to front.
    pub fn render_items(&self) -> Vec<RenderItem> {
        render_items(&self.mesh, &self.orientation)
    }

    /// Draw the die at its current orientation.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        self.draw_items(surface, &self.render_items());
    }

    fn draw_items<S: DrawSurface + ?Sized>(&self, surface: &mut S, items: &[RenderItem]) {
        self.renderer.draw(surface, items, &self.viewport, &self.theme);
    }

    /// `advance`, then draw the resulting frame.
    pub fn step<S: DrawSurface + ?Sized>(&mut self, now: TimeMs, surface: &mut S) -> Progress {
        let frame = self.advance(now);
        self.draw_items(surface, &frame.items);
        frame.progress
    }

    /// Adopt a new viewport size and return the current orientation's
    /// items for the host to redraw. Never starts, stops or otherwise
    /// touches a roll.
    pub fn resize(
        &mut self,
        logical_width: Real,
        logical_height: Real,
        device_pixel_ratio: Real,
    ) -> Vec<RenderItem> {
        self.viewport = Viewport::new(
            logical_width,
            logical_height,
            device_pixel_ratio,
            &self.settings,
        );
        debug!(self.log, "Resized viewport";
            "width" => self.viewport.width(),
            "height" => self.viewport.height(),
            "scale" => self.viewport.scale()
        );
        self.render_items()
    }

    /// Takes effect from the next draw.
    pub fn set_theme_color(&mut self, base: Rgb) {
        debug!(self.log, "Theme color changed"; "rgb" => format!("{:?}", base));
        self.theme.set_base(base);
    }

    /// Like `set_theme_color`, parsing a CSS-style colour; anything
    /// unrecognised selects the default colour.
    pub fn set_theme_str(&mut self, color: &str) {
        self.set_theme_color(parse_color(color));
    }
}
