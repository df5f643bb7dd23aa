//! Simulation builder and frame driver.

use crate::config::{FieldConfig, MotionConfig, DEFAULT_PARTICLE_COUNT, DEFAULT_SPHERE_RADIUS};
use crate::error::FieldError;
use crate::field::{FieldStats, ParticleField};
use crate::mode::Mode;
use crate::rotation::Rotation;
use crate::spawn::Sampler;
use crate::stepper::Stepper;
use crate::time::Time;
use crate::visuals::VisualHints;

/// A Tai Chi field builder.
///
/// Use method chaining to configure, then call `.build()` to generate the
/// particles and get a [`Session`] to drive every frame.
///
/// ```
/// use taichi_field::prelude::*;
///
/// let mut session = Simulation::new()
///     .with_particle_count(2_000)
///     .with_seed(7)
///     .with_mode(Mode::Scatter)
///     .build()
///     .unwrap();
///
/// let frame = session.step_at(0.0);
/// assert_eq!(frame.positions.len(), 6_000);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    particle_count: usize,
    sphere_radius: f32,
    seed: Option<u64>,
    mode: Mode,
    motion: MotionConfig,
    visuals: VisualHints,
    time: Option<Time>,
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            seed: None,
            mode: Mode::default(),
            motion: MotionConfig::default(),
            visuals: VisualHints::default(),
            time: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            particle_count: config.particle_count,
            sphere_radius: config.sphere_radius,
            seed: config.seed,
            mode: config.initial_mode,
            motion: config.motion.clone(),
            visuals: config.visuals.clone(),
            time: None,
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the radius of the formed sphere. The scatter cloud is five times larger.
    pub fn with_sphere_radius(mut self, radius: f32) -> Self {
        self.sphere_radius = radius;
        self
    }

    /// Seed the generator for a reproducible field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mode to start in.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Configure the rendering hints handed to the renderer.
    pub fn with_visuals<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut VisualHints),
    {
        f(&mut self.visuals);
        self
    }

    /// Use a specific clock, e.g. [`Time::fixed`] for headless runs.
    /// Defaults to the wall clock.
    pub fn with_time(mut self, time: Time) -> Self {
        self.time = Some(time);
        self
    }

    /// Generate the field and return a session ready to step.
    pub fn build(self) -> Result<Session, FieldError> {
        let stepper = Stepper::new(self.motion)?;
        let mut sampler = Sampler::from_optional_seed(self.seed);
        let field = ParticleField::generate_with(self.particle_count, self.sphere_radius, &mut sampler)?;
        self.visuals.check();

        Ok(Session {
            field,
            stepper,
            rotation: Rotation::new(),
            mode: self.mode,
            time: self.time.unwrap_or_default(),
            visuals: self.visuals,
            frames: 0,
        })
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Live positions, `[x0, y0, z0, x1, ...]`.
    pub positions: &'a [f32],
    /// Colors, `[r0, g0, b0, r1, ...]`. Constant for the session.
    pub colors: &'a [f32],
    /// Rotation to apply to the whole cloud.
    pub rotation: Rotation,
    /// Seconds since the session started.
    pub elapsed: f32,
    /// Frames stepped so far, including this one.
    pub index: u64,
}

/// A running field: particles, rotation, mode and clock.
///
/// Stepping and reading are strictly sequenced: [`Session::frame`] finishes
/// updating every position before the returned [`Frame`] can be read.
#[derive(Debug)]
pub struct Session {
    field: ParticleField,
    stepper: Stepper,
    rotation: Rotation,
    mode: Mode,
    time: Time,
    visuals: VisualHints,
    frames: u64,
}

impl Session {
    /// Read the clock, step once, and return the frame.
    pub fn frame(&mut self) -> Frame<'_> {
        let (elapsed, _) = self.time.update();
        self.step_at(elapsed)
    }

    /// Step once at an explicit time, bypassing the session clock.
    pub fn step_at(&mut self, elapsed: f32) -> Frame<'_> {
        self.stepper
            .step(&mut self.field, self.mode, elapsed, &mut self.rotation);
        self.frames += 1;
        Frame {
            positions: self.field.live_as_f32(),
            colors: self.field.colors_as_f32(),
            rotation: self.rotation,
            elapsed,
            index: self.frames,
        }
    }

    /// Frames stepped so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode; takes effect on the next step.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::debug!("mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Switch mode by name, rejecting anything but `scatter` or `form`.
    pub fn set_mode_str(&mut self, name: &str) -> Result<(), FieldError> {
        let mode = name.parse()?;
        self.set_mode(mode);
        Ok(())
    }

    /// Flip between scatter and form, returning the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[inline]
    pub fn time(&self) -> &Time {
        &self.time
    }

    #[inline]
    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.time
    }

    #[inline]
    pub fn visuals(&self) -> &VisualHints {
        &self.visuals
    }

    pub fn stats(&self) -> FieldStats {
        self.field.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: Mode) -> Session {
        Simulation::new()
            .with_particle_count(64)
            .with_seed(3)
            .with_mode(mode)
            .with_time(Time::fixed(1.0 / 60.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_rejects_zero_particles() {
        let err = Simulation::new().with_particle_count(0).build().unwrap_err();
        assert_eq!(err, FieldError::InvalidParticleCount(0));
    }

    #[test]
    fn test_build_rejects_bad_motion() {
        let motion = MotionConfig {
            form_rate: 2.0,
            ..MotionConfig::default()
        };
        let err = Simulation::new().with_motion(motion).build().unwrap_err();
        assert_eq!(err, FieldError::InvalidSmoothingRate(2.0));
    }

    #[test]
    fn test_frame_uses_session_clock() {
        let mut session = session(Mode::Form);
        session.frame();
        let frame = session.frame();
        assert!((frame.elapsed - 2.0 / 60.0).abs() < 1e-6);
        assert_eq!(frame.index, 2);
        assert_eq!(frame.positions.len(), 64 * 3);
        assert_eq!(frame.colors.len(), 64 * 3);
    }

    #[test]
    fn test_mode_switching() {
        let mut session = session(Mode::Form);
        assert_eq!(session.toggle_mode(), Mode::Scatter);
        assert!(session.set_mode_str("form").is_ok());
        assert_eq!(session.mode(), Mode::Form);

        let err = session.set_mode_str("vortex").unwrap_err();
        assert_eq!(err, FieldError::InvalidMode("vortex".into()));
        assert_eq!(session.mode(), Mode::Form);
    }

    #[test]
    fn test_with_visuals() {
        let session = Simulation::new()
            .with_particle_count(1)
            .with_visuals(|v| {
                v.opacity(0.5);
            })
            .build()
            .unwrap();
        assert_eq!(session.visuals().opacity, 0.5);
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = FieldConfig {
            particle_count: 32,
            seed: Some(99),
            ..FieldConfig::default()
        };
        let a = Simulation::from_config(&config).build().unwrap();
        let b = Simulation::from_config(&config).build().unwrap();
        assert_eq!(a.field().target_positions(), b.field().target_positions());
        assert_eq!(a.mode(), Mode::Form);
    }
}
