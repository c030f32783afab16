use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::theme::DEFAULT_THEME_COLOR;
use crate::types::*;

/// All the tunables for a die engine.
///
/// Every field has a default, so a settings file only needs to
/// mention what it wants to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Distance added to view-space z before the perspective divide.
    /// Must exceed 1 so the whole unit-sphere mesh stays in front of the camera.
    pub camera_offset: Real,
    /// Projection scale for narrow viewports.
    pub mobile_scale: Real,
    pub desktop_scale: Real,
    /// Widest logical viewport that still counts as narrow.
    pub mobile_max_width: Real,
    pub max_device_pixel_ratio: Real,
    pub roll_duration: TimeMs,
    /// Total free-spin angle at the start of a roll, in radians;
    /// it decays to zero as the roll settles.
    pub spin_total: Real,
    /// Direction toward the light, in view space. Normalized on use.
    pub light_direction: [Real; 3],
    pub theme_color: Rgb,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(message.to_string()))
        };

        // Also rejects NaN.
        if !(self.camera_offset > 1.0) {
            return invalid("camera_offset must be greater than 1");
        }
        if !(self.mobile_scale > 0.0 && self.desktop_scale > 0.0) {
            return invalid("projection scales must be positive");
        }
        if !(self.max_device_pixel_ratio >= 1.0) {
            return invalid("max_device_pixel_ratio must be at least 1");
        }
        if !(self.roll_duration > 0.0 && self.roll_duration.is_finite()) {
            return invalid("roll_duration must be positive");
        }
        if !self.spin_total.is_finite() {
            return invalid("spin_total must be finite");
        }
        let light = Vec3::from(self.light_direction);
        if !(light.norm() > 0.0 && light.norm().is_finite()) {
            return invalid("light_direction must be a non-zero vector");
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn light(&self) -> Vec3 {
        crate::math::normalize(&Vec3::from(self.light_direction))
    }

    pub fn scale_for_width(&self, logical_width: Real) -> Real {
        if logical_width <= self.mobile_max_width {
            self.mobile_scale
        } else {
            self.desktop_scale
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            camera_offset: 3.5,
            mobile_scale: 0.9,
            desktop_scale: 0.7,
            mobile_max_width: 768.0,
            max_device_pixel_ratio: 2.0,
            roll_duration: 5000.0,
            spin_total: PI * 14.0,
            light_direction: [-0.6, 0.8, 0.5],
            theme_color: DEFAULT_THEME_COLOR,
        }
    }
}
