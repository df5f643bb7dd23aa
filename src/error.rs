//! Error types for the particle field.
//!
//! Generation and stepping are pure numeric work over fixed-size buffers, so
//! the only failures are bad inputs at the boundary: a particle count of
//! zero, a degenerate radius, an unknown mode name, or a config file that
//! cannot be read.

use thiserror::Error;

/// Invalid input rejected before a field is built or stepped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Particle count must be at least one.
    #[error("particle count must be positive, got {0}")]
    InvalidParticleCount(usize),
    /// Sphere radius must be finite and greater than zero.
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    /// Mode name other than `scatter` or `form`.
    #[error("unknown mode {0:?}, expected \"scatter\" or \"form\"")]
    InvalidMode(String),
    /// Smoothing rate outside `(0, 1]`.
    #[error("smoothing rate must be within (0, 1], got {0}")]
    InvalidSmoothingRate(f32),
    /// Breathing or orbit amplitude that is NaN or infinite.
    #[error("motion amplitude must be finite, got {0}")]
    InvalidAmplitude(f32),
    /// Explicit per-particle buffers of different lengths.
    #[error("buffer length mismatch: {initial} initial positions, {targets} targets")]
    LengthMismatch {
        /// Number of initial positions supplied.
        initial: usize,
        /// Number of formed targets supplied.
        targets: usize,
    },
}

/// Errors that can occur when loading or saving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// File contents are not valid config JSON.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// Config parsed but describes an invalid field.
    #[error("invalid config: {0}")]
    Invalid(#[from] FieldError),
}
