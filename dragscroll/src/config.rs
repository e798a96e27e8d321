//! Slider tuning and attachment settings.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;

/// Settings shared by every attached slider.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides:
///
/// ```toml
/// friction = 0.9
/// active_class = "grabbing"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Marker class that turns a node into a slider.
    pub selector: String,

    /// Class present on a slider while it is being dragged.
    pub active_class: String,

    /// Content moves `drag_factor` cells per cell of pointer motion.
    pub drag_factor: f64,

    /// Velocity multiplier applied on every momentum frame, in (0, 1).
    pub friction: f64,

    /// Momentum stops once the velocity magnitude drops to this value.
    pub stop_threshold: f64,

    /// Cells scrolled per wheel notch by the host's native wheel handling.
    pub wheel_step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            selector: "list-slider".to_string(),
            active_class: "active".to_string(),
            drag_factor: 0.5,
            friction: 0.95,
            stop_threshold: 0.5,
            wheel_step: 4.0,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker class.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Set the class toggled while dragging.
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn drag_factor(mut self, factor: f64) -> Self {
        self.drag_factor = factor;
        self
    }

    pub fn friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub fn stop_threshold(mut self, threshold: f64) -> Self {
        self.stop_threshold = threshold;
        self
    }

    pub fn wheel_step(mut self, step: f64) -> Self {
        self.wheel_step = step;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_toml_str(&source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no slider config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Check that the values describe a decaying, finite motion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.trim().is_empty() {
            return Err(invalid("selector", "must not be empty"));
        }
        if self.active_class.trim().is_empty() {
            return Err(invalid("active_class", "must not be empty"));
        }
        if !self.drag_factor.is_finite() || self.drag_factor <= 0.0 {
            return Err(invalid("drag_factor", "must be a positive number"));
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(invalid("friction", "must be between 0 and 1 (exclusive)"));
        }
        if !self.stop_threshold.is_finite() || self.stop_threshold <= 0.0 {
            return Err(invalid("stop_threshold", "must be a positive number"));
        }
        if !self.wheel_step.is_finite() || self.wheel_step < 0.0 {
            return Err(invalid("wheel_step", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
