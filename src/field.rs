//! The particle field: generation and buffers.
//!
//! A field holds four parallel buffers, one entry per particle:
//!
//! | buffer | written |
//! |--------|---------|
//! | initial (scattered) position | once, at generation |
//! | formed target position | once, at generation |
//! | color | once, at generation |
//! | live position | every step |
//!
//! The count never changes after generation. Buffers are `Vec<Vec3>`; since
//! `Vec3` is plain-old-data the renderer can take them as flat `[f32]` slices
//! with `x, y, z` at `3*i + 0, 1, 2`.
//!
//! # Example
//!
//! ```
//! use taichi_field::field::ParticleField;
//! use taichi_field::spawn::Sampler;
//!
//! let field = ParticleField::generate_with(1000, 4.5, &mut Sampler::from_seed(1)).unwrap();
//! assert_eq!(field.len(), 1000);
//! assert_eq!(field.scatter_radius(), 22.5);
//! assert_eq!(field.live_positions(), field.initial_positions());
//! ```

use crate::config::{validate_particle_count, validate_radius, FieldConfig, DEFAULT_SPHERE_RADIUS};
use crate::error::FieldError;
use crate::palette::{Emblem, Shade};
use crate::spawn::Sampler;
use glam::Vec3;
use serde::Serialize;

/// Scatter cloud radius as a multiple of the sphere radius.
pub const SCATTER_FACTOR: f32 = 5.0;

/// Particle buffers for one session.
#[derive(Debug, Clone)]
pub struct ParticleField {
    sphere_radius: f32,
    scatter_radius: f32,
    initial: Vec<Vec3>,
    targets: Vec<Vec3>,
    colors: Vec<Vec3>,
    live: Vec<Vec3>,
}

impl ParticleField {
    /// Generate `count` particles in the default sphere from fresh entropy.
    pub fn generate(count: usize) -> Result<Self, FieldError> {
        Self::generate_with(count, DEFAULT_SPHERE_RADIUS, &mut Sampler::from_entropy())
    }

    /// Generate a field from a validated config.
    pub fn from_config(config: &FieldConfig) -> Result<Self, FieldError> {
        config.validate()?;
        let mut sampler = Sampler::from_optional_seed(config.seed);
        Self::generate_with(config.particle_count, config.sphere_radius, &mut sampler)
    }

    /// Generate `count` particles in a sphere of `sphere_radius`.
    ///
    /// Each particle gets a formed target uniform in the sphere volume, a
    /// color derived from that target, and an independently drawn initial
    /// position uniform in the scatter sphere.
    pub fn generate_with(
        count: usize,
        sphere_radius: f32,
        sampler: &mut Sampler,
    ) -> Result<Self, FieldError> {
        validate_particle_count(count)?;
        validate_radius(sphere_radius)?;

        let scatter_radius = sphere_radius * SCATTER_FACTOR;
        let emblem = Emblem::new(sphere_radius);

        let mut initial = Vec::with_capacity(count);
        let mut targets = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            let target = sampler.random_in_sphere(sphere_radius);
            targets.push(target);
            colors.push(emblem.color_at(target));
            initial.push(sampler.random_in_sphere(scatter_radius));
        }

        let field = Self::assemble(sphere_radius, initial, targets, colors);
        let stats = field.stats();
        log::info!(
            "generated field: {} particles ({} black, {} white), radius {}",
            count,
            stats.black,
            stats.white,
            sphere_radius
        );
        Ok(field)
    }

    /// Build a field from explicit initial and target positions.
    ///
    /// Colors are still derived from the targets. Useful for scripted
    /// scenarios and tests that need exact positions.
    pub fn from_parts(
        initial: Vec<Vec3>,
        targets: Vec<Vec3>,
        sphere_radius: f32,
    ) -> Result<Self, FieldError> {
        if initial.len() != targets.len() {
            return Err(FieldError::LengthMismatch {
                initial: initial.len(),
                targets: targets.len(),
            });
        }
        validate_particle_count(initial.len())?;
        validate_radius(sphere_radius)?;

        let emblem = Emblem::new(sphere_radius);
        let colors = targets.iter().map(|&t| emblem.color_at(t)).collect();
        Ok(Self::assemble(sphere_radius, initial, targets, colors))
    }

    fn assemble(sphere_radius: f32, initial: Vec<Vec3>, targets: Vec<Vec3>, colors: Vec<Vec3>) -> Self {
        let live = initial.clone();
        Self {
            sphere_radius,
            scatter_radius: sphere_radius * SCATTER_FACTOR,
            initial,
            targets,
            colors,
            live,
        }
    }

    /// Number of particles. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Always `false`: a field holds at least one particle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[inline]
    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    #[inline]
    pub fn scatter_radius(&self) -> f32 {
        self.scatter_radius
    }

    /// Emblem geometry used to color this field.
    pub fn emblem(&self) -> Emblem {
        Emblem::new(self.sphere_radius)
    }

    #[inline]
    pub fn initial_positions(&self) -> &[Vec3] {
        &self.initial
    }

    #[inline]
    pub fn target_positions(&self) -> &[Vec3] {
        &self.targets
    }

    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    #[inline]
    pub fn live_positions(&self) -> &[Vec3] {
        &self.live
    }

    /// Live positions as `[x0, y0, z0, x1, ...]`.
    #[inline]
    pub fn live_as_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.live)
    }

    /// Colors as `[r0, g0, b0, r1, ...]`.
    #[inline]
    pub fn colors_as_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Split borrow for the stepper: read-only initial and target buffers,
    /// mutable live buffer.
    pub(crate) fn step_buffers(&mut self) -> (&[Vec3], &[Vec3], &mut [Vec3]) {
        (&self.initial, &self.targets, &mut self.live)
    }

    /// Summary of colors and formation progress.
    pub fn stats(&self) -> FieldStats {
        let black = self
            .colors
            .iter()
            .filter(|&&c| Shade::from_rgb(c) == Some(Shade::Black))
            .count();
        let white = self.colors.len() - black;

        let (sum, max) = self
            .live
            .iter()
            .zip(&self.targets)
            .map(|(live, target)| live.distance(*target))
            .fold((0.0f64, 0.0f32), |(sum, max), d| (sum + d as f64, max.max(d)));

        FieldStats {
            particle_count: self.len(),
            black,
            white,
            mean_distance_to_target: (sum / self.len() as f64) as f32,
            max_distance_to_target: max,
        }
    }
}

/// Aggregate numbers about a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    pub particle_count: usize,
    /// Particles colored black.
    pub black: usize,
    /// Particles colored white.
    pub white: usize,
    /// Mean distance from live position to formed target.
    pub mean_distance_to_target: f32,
    /// Largest distance from live position to formed target.
    pub max_distance_to_target: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sizes() {
        let field = ParticleField::generate_with(500, 4.5, &mut Sampler::from_seed(1)).unwrap();
        assert_eq!(field.len(), 500);
        assert_eq!(field.initial_positions().len(), 500);
        assert_eq!(field.target_positions().len(), 500);
        assert_eq!(field.colors().len(), 500);
        assert_eq!(field.live_as_f32().len(), 1500);
        assert_eq!(field.colors_as_f32().len(), 1500);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_generate_rejects_zero() {
        assert_eq!(
            ParticleField::generate(0).unwrap_err(),
            FieldError::InvalidParticleCount(0)
        );
    }

    #[test]
    fn test_generate_rejects_bad_radius() {
        let err = ParticleField::generate_with(10, -2.0, &mut Sampler::from_seed(1)).unwrap_err();
        assert_eq!(err, FieldError::InvalidRadius(-2.0));
    }

    #[test]
    fn test_flat_layout_matches_vectors() {
        let field = ParticleField::generate_with(8, 1.0, &mut Sampler::from_seed(5)).unwrap();
        let flat = field.live_as_f32();
        for (i, p) in field.live_positions().iter().enumerate() {
            assert_eq!(flat[3 * i], p.x);
            assert_eq!(flat[3 * i + 1], p.y);
            assert_eq!(flat[3 * i + 2], p.z);
        }
    }

    #[test]
    fn test_colors_follow_targets() {
        let field = ParticleField::generate_with(2000, 4.5, &mut Sampler::from_seed(2)).unwrap();
        let emblem = field.emblem();
        for (target, color) in field.target_positions().iter().zip(field.colors()) {
            assert_eq!(emblem.color_at(*target), *color);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::generate_with(100, 4.5, &mut Sampler::from_seed(11)).unwrap();
        let b = ParticleField::generate_with(100, 4.5, &mut Sampler::from_seed(11)).unwrap();
        assert_eq!(a.initial_positions(), b.initial_positions());
        assert_eq!(a.target_positions(), b.target_positions());
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        let err = ParticleField::from_parts(vec![Vec3::ZERO; 2], vec![Vec3::ZERO; 3], 1.0).unwrap_err();
        assert_eq!(err, FieldError::LengthMismatch { initial: 2, targets: 3 });
    }

    #[test]
    fn test_from_parts_rejects_empty() {
        let err = ParticleField::from_parts(Vec::new(), Vec::new(), 1.0).unwrap_err();
        assert_eq!(err, FieldError::InvalidParticleCount(0));
    }

    #[test]
    fn test_stats_counts_both_shades() {
        let r = 4.5;
        let field = ParticleField::from_parts(
            vec![Vec3::ZERO; 2],
            vec![Vec3::new(0.0, r / 2.0, 0.0), Vec3::new(r * 0.9, 0.0, 0.0)],
            r,
        )
        .unwrap();
        let stats = field.stats();
        assert_eq!(stats.black, 1);
        assert_eq!(stats.white, 1);
        assert!((stats.max_distance_to_target - r * 0.9).abs() < 1e-5);
    }
}
