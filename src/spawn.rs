//! Random sampling for particle generation.
//!
//! Provides the volumetric sphere sampling used to place both the formed
//! emblem targets and the scattered cloud.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Random source handed to the field generator.
///
/// Wraps a small, fast RNG. Construct it from a seed when the exact field
/// must be reproducible (tests, benchmarks, recorded sessions), or from
/// entropy for a fresh field every run:
///
/// ```
/// use taichi_field::spawn::Sampler;
///
/// let mut sampler = Sampler::from_seed(7);
/// let p = sampler.random_in_sphere(4.5);
/// assert!(p.length() <= 4.5 + 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    /// Deterministic sampler: the same seed yields the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded sampler if a seed is given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random point inside a sphere of given radius, centered at origin.
    ///
    /// Uniform by volume: azimuth `θ = 2π·u`, polar angle `φ = acos(2v − 1)`
    /// and radius `r = radius · cbrt(w)`. Drawing `r` uniformly instead
    /// would pile points up near the center.
    pub fn random_in_sphere(&mut self, radius: f32) -> Vec3 {
        let u = self.random();
        let v = self.random();
        let w = self.random();

        let theta = TAU * u;
        let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
        let r = radius * w.cbrt();

        spherical_to_cartesian(r, theta, phi)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Standard spherical-to-Cartesian conversion (`theta` azimuth, `phi` polar).
#[inline]
pub fn spherical_to_cartesian(r: f32, theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_in_sphere_bounds() {
        let mut sampler = Sampler::from_seed(1);
        for _ in 0..1000 {
            let pos = sampler.random_in_sphere(0.5);
            assert!(pos.length() <= 0.5 + 0.001);
        }
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let mut a = Sampler::from_seed(42);
        let mut b = Sampler::from_seed(42);
        for _ in 0..50 {
            assert_eq!(a.random_in_sphere(2.0), b.random_in_sphere(2.0));
        }
    }

    #[test]
    fn test_random_is_unit_interval() {
        let mut sampler = Sampler::from_seed(3);
        for _ in 0..1000 {
            let x = sampler.random();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_spherical_to_cartesian_poles() {
        let north = spherical_to_cartesian(2.0, 0.0, 0.0);
        assert!((north - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);

        let equator = spherical_to_cartesian(1.0, 0.0, std::f32::consts::FRAC_PI_2);
        assert!((equator - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_sphere_fills_volume() {
        // Half the volume of a sphere lies beyond r = R / cbrt(2).
        let mut sampler = Sampler::from_seed(9);
        let n = 20_000;
        let shell = 1.0 / 2f32.cbrt();
        let outer = (0..n)
            .filter(|_| sampler.random_in_sphere(1.0).length() > shell)
            .count();
        let fraction = outer as f32 / n as f32;
        assert!((fraction - 0.5).abs() < 0.02, "outer fraction {fraction}");
    }
}
