//! Configuration for a Tai Chi field.
//!
//! Serializes to JSON so a session can be described in a file and loaded by
//! the runner:
//!
//! ```json
//! {
//!   "name": "Tai Chi",
//!   "particle_count": 15000,
//!   "sphere_radius": 4.5,
//!   "seed": 7,
//!   "initial_mode": "form",
//!   "motion": { "form_rate": 0.025, "scatter_rate": 0.015,
//!               "breathing_amplitude": 0.02, "orbit_amplitude": 2.0 }
//! }
//! ```

use crate::error::{ConfigError, FieldError};
use crate::mode::Mode;
use crate::visuals::VisualHints;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 15_000;

/// Default radius of the formed sphere.
pub const DEFAULT_SPHERE_RADIUS: f32 = 4.5;

fn default_name() -> String {
    "Tai Chi".into()
}

/// Per-frame motion parameters for the stepper.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of the remaining distance covered per frame in form mode.
    pub form_rate: f32,
    /// Fraction of the remaining distance covered per frame in scatter mode.
    pub scatter_rate: f32,
    /// Amplitude of the breathing offset around formed targets (0 disables it).
    pub breathing_amplitude: f32,
    /// Amplitude of the orbital drift around scattered positions.
    pub orbit_amplitude: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            form_rate: 0.025,
            scatter_rate: 0.015,
            breathing_amplitude: 0.02,
            orbit_amplitude: 2.0,
        }
    }
}

impl MotionConfig {
    /// Motion with the breathing term switched off.
    pub fn without_breathing() -> Self {
        Self {
            breathing_amplitude: 0.0,
            ..Self::default()
        }
    }

    /// Smoothing rate used while in `mode`.
    #[inline]
    pub fn rate(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Form => self.form_rate,
            Mode::Scatter => self.scatter_rate,
        }
    }

    /// Both rates must lie in `(0, 1]`; anything else either never moves or
    /// overshoots the target. Amplitudes must be finite.
    pub fn validate(&self) -> Result<(), FieldError> {
        for rate in [self.form_rate, self.scatter_rate] {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(FieldError::InvalidSmoothingRate(rate));
            }
        }
        for amplitude in [self.breathing_amplitude, self.orbit_amplitude] {
            if !amplitude.is_finite() {
                return Err(FieldError::InvalidAmplitude(amplitude));
            }
        }
        Ok(())
    }
}

/// Complete field configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub particle_count: usize,
    pub sphere_radius: f32,
    /// Seed for reproducible generation; `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub initial_mode: Mode,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub visuals: VisualHints,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            seed: None,
            initial_mode: Mode::Form,
            motion: MotionConfig::default(),
            visuals: VisualHints::default(),
        }
    }
}

impl FieldConfig {
    /// Check the contracts a field relies on.
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_particle_count(self.particle_count)?;
        validate_radius(self.sphere_radius)?;
        self.motion.validate()
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn validate_particle_count(count: usize) -> Result<(), FieldError> {
    if count == 0 {
        return Err(FieldError::InvalidParticleCount(count));
    }
    Ok(())
}

pub(crate) fn validate_radius(radius: f32) -> Result<(), FieldError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(FieldError::InvalidRadius(radius));
    }
    Ok(())
}
