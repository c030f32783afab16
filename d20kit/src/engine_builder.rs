use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::ConfigError;
use crate::render::Viewport;
use crate::roll::RollEngine;
use crate::settings::Settings;
use crate::types::*;

/// Builder for [`RollEngine`].
///
/// Logs to the terminal unless told otherwise, uses default settings,
/// and starts with an 800x600 viewport; the host is expected to call
/// `RollEngine::resize` as soon as it knows better.
#[must_use]
pub struct EngineBuilder {
    root_log: slog::Logger,
    settings: Settings,
    logical_size: (Real, Real),
    device_pixel_ratio: Real,
}

impl EngineBuilder {
    pub fn new() -> EngineBuilder {
        use slog::Drain;

        let decorator = slog_term::TermDecorator::new().stderr().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        let root_log = slog::Logger::root(drain, o!("d20kit_version" => env!("CARGO_PKG_VERSION")));

        EngineBuilder {
            root_log,
            settings: Settings::default(),
            logical_size: (800.0, 600.0),
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_logger(mut self, log: slog::Logger) -> Self {
        self.root_log = log;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_viewport(
        mut self,
        logical_width: Real,
        logical_height: Real,
        device_pixel_ratio: Real,
    ) -> Self {
        self.logical_size = (logical_width, logical_height);
        self.device_pixel_ratio = device_pixel_ratio;
        self
    }

    pub fn root_log(&self) -> &slog::Logger {
        &self.root_log
    }

    /// Build with any source of randomness.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<RollEngine<R>, ConfigError> {
        self.settings.validate()?;
        let viewport = Viewport::new(
            self.logical_size.0,
            self.logical_size.1,
            self.device_pixel_ratio,
            &self.settings,
        );
        Ok(RollEngine::new(&self.root_log, self.settings, viewport, rng))
    }

    /// Build with a reproducible random sequence.
    pub fn build_seeded(self, seed: u64) -> Result<RollEngine<Xoshiro256StarStar>, ConfigError> {
        self.build_with_rng(Xoshiro256StarStar::seed_from_u64(seed))
    }

    /// Build with an unpredictable random sequence.
    pub fn build(self) -> Result<RollEngine<Xoshiro256StarStar>, ConfigError> {
        self.build_with_rng(Xoshiro256StarStar::from_entropy())
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
