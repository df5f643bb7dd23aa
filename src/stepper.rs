//! Per-frame update of live positions.
//!
//! Each frame every particle gets a moving target and its live position
//! chases it with a one-pole filter:
//!
//! ```text
//! live += (target - live) * rate
//! ```
//!
//! Targets depend on the mode:
//!
//! - **form**: the formed position plus a breathing offset
//!   `sin(t + 0.1 i) · 0.02`, the same on all three axes. Rate 0.025.
//! - **scatter**: the initial position plus an orbital drift
//!   `(sin(0.3 t + iy), cos(0.2 t + ix), sin(0.4 t + i)) · 2.0`. Rate 0.015.
//!
//! Particles never read each other, so the loop is a plain data-parallel map.
//! With the `parallel` feature it runs on rayon.

use crate::config::MotionConfig;
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::mode::Mode;
use crate::rotation::Rotation;
use glam::Vec3;

/// Phase offset between neighbouring particles' breathing.
const BREATHING_PHASE_STEP: f32 = 0.1;

/// Orbital drift frequencies for x, y and z.
const ORBIT_FREQUENCIES: Vec3 = Vec3::new(0.3, 0.2, 0.4);

/// Formed target for particle `index` at time `elapsed`.
#[inline]
pub fn formed_target(target: Vec3, index: usize, elapsed: f32, amplitude: f32) -> Vec3 {
    let noise = (elapsed + index as f32 * BREATHING_PHASE_STEP).sin() * amplitude;
    target + Vec3::splat(noise)
}

/// Scatter target for particle `index` at time `elapsed`.
#[inline]
pub fn scatter_target(initial: Vec3, index: usize, elapsed: f32, amplitude: f32) -> Vec3 {
    let phase = ORBIT_FREQUENCIES * elapsed;
    let drift = Vec3::new(
        (phase.x + initial.y).sin(),
        (phase.y + initial.x).cos(),
        (phase.z + index as f32).sin(),
    );
    initial + drift * amplitude
}

/// Move `live` the fraction `rate` of the way to `target`.
#[inline]
pub fn smooth_toward(live: Vec3, target: Vec3, rate: f32) -> Vec3 {
    live + (target - live) * rate
}

/// Advances a field one frame at a time.
#[derive(Debug, Clone, Default)]
pub struct Stepper {
    motion: MotionConfig,
}

impl Stepper {
    /// Stepper with validated motion parameters.
    pub fn new(motion: MotionConfig) -> Result<Self, FieldError> {
        motion.validate()?;
        Ok(Self { motion })
    }

    #[inline]
    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    /// Target of particle `index` under `mode` at `elapsed`.
    #[inline]
    pub fn target_for(&self, field: &ParticleField, index: usize, mode: Mode, elapsed: f32) -> Vec3 {
        match mode {
            Mode::Form => formed_target(
                field.target_positions()[index],
                index,
                elapsed,
                self.motion.breathing_amplitude,
            ),
            Mode::Scatter => scatter_target(
                field.initial_positions()[index],
                index,
                elapsed,
                self.motion.orbit_amplitude,
            ),
        }
    }

    /// Advance every live position and the field rotation by one frame.
    ///
    /// `elapsed` is seconds since the session started, supplied by the caller
    /// so stepping is deterministic.
    pub fn step(&self, field: &mut ParticleField, mode: Mode, elapsed: f32, rotation: &mut Rotation) {
        self.step_particles(field, mode, elapsed);
        rotation.advance(mode, elapsed);
        log::trace!("stepped {} particles in {} mode at t={:.3}", field.len(), mode, elapsed);
    }

    /// Advance live positions only.
    pub fn step_particles(&self, field: &mut ParticleField, mode: Mode, elapsed: f32) {
        let rate = self.motion.rate(mode);
        let breathing = self.motion.breathing_amplitude;
        let orbit = self.motion.orbit_amplitude;
        let (initial, targets, live) = field.step_buffers();
        debug_assert_eq!(initial.len(), live.len());
        debug_assert_eq!(targets.len(), live.len());

        let update = move |index: usize, live: &mut Vec3, initial: Vec3, formed: Vec3| {
            let target = match mode {
                Mode::Form => formed_target(formed, index, elapsed, breathing),
                Mode::Scatter => scatter_target(initial, index, elapsed, orbit),
            };
            *live = smooth_toward(*live, target, rate);
        };

        for_each_particle(initial, targets, live, update);
    }
}

#[cfg(feature = "parallel")]
fn for_each_particle<F>(initial: &[Vec3], targets: &[Vec3], live: &mut [Vec3], update: F)
where
    F: Fn(usize, &mut Vec3, Vec3, Vec3) + Send + Sync,
{
    use rayon::prelude::*;
    live.par_iter_mut()
        .zip(initial.par_iter())
        .zip(targets.par_iter())
        .enumerate()
        .for_each(|(index, ((live, &initial), &formed))| update(index, live, initial, formed));
}

#[cfg(not(feature = "parallel"))]
fn for_each_particle<F>(initial: &[Vec3], targets: &[Vec3], live: &mut [Vec3], update: F)
where
    F: Fn(usize, &mut Vec3, Vec3, Vec3),
{
    for (index, ((live, &initial), &formed)) in live.iter_mut().zip(initial).zip(targets).enumerate() {
        update(index, live, initial, formed);
    }
}
