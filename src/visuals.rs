//! Rendering hints for the point renderer.
//!
//! This crate never draws anything. These types describe how the field is
//! meant to look so the renderer that consumes the position and color buffers
//! can configure itself:
//!
//! ```
//! use taichi_field::visuals::{BlendMode, VisualHints};
//!
//! let mut hints = VisualHints::default();
//! hints.point_size(0.05).opacity(0.9);
//! assert_eq!(hints.blend_mode, BlendMode::Normal);
//! ```

use serde::{Deserialize, Serialize};

/// Slate grey background (`#64748b`), dark enough for white points and light
/// enough for black ones.
pub const BACKGROUND: [f32; 3] = [100.0 / 255.0, 116.0 / 255.0, 139.0 / 255.0];

/// How overlapping points combine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending. Required for black points to show at all.
    #[default]
    Normal,
    /// Colors add up. Black points contribute nothing and vanish.
    Additive,
}

impl BlendMode {
    pub fn variants() -> &'static [&'static str] {
        &["Normal", "Additive"]
    }

    /// Whether a pure black point stays visible under this mode.
    pub fn shows_black(self) -> bool {
        matches!(self, BlendMode::Normal)
    }
}

/// Orbit camera setup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CameraHints {
    /// Initial camera position, looking at the origin.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Closest zoom distance.
    pub min_distance: f32,
    /// Farthest zoom distance.
    pub max_distance: f32,
    /// Orbit damping factor.
    pub damping: f32,
    pub enable_pan: bool,
    pub enable_zoom: bool,
}

impl Default for CameraHints {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 12.0],
            fov_degrees: 45.0,
            min_distance: 5.0,
            max_distance: 20.0,
            damping: 0.05,
            enable_pan: false,
            enable_zoom: true,
        }
    }
}

impl CameraHints {
    /// Clamp an orbit distance to the allowed zoom range.
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }
}

/// Point material and scene settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VisualHints {
    /// Point size in world units.
    pub point_size: f32,
    /// Whether points shrink with distance.
    pub size_attenuation: bool,
    /// Point opacity (0.0-1.0).
    pub opacity: f32,
    pub blend_mode: BlendMode,
    /// Depth writes stay off so overlapping points read as a cloud.
    pub depth_write: bool,
    /// Background clear color (RGB, 0.0-1.0).
    pub background_color: [f32; 3],
    #[serde(default)]
    pub camera: CameraHints,
}

impl Default for VisualHints {
    fn default() -> Self {
        Self {
            point_size: 0.07,
            size_attenuation: true,
            opacity: 0.85,
            blend_mode: BlendMode::Normal,
            depth_write: false,
            background_color: BACKGROUND,
            camera: CameraHints::default(),
        }
    }
}

impl VisualHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_size(&mut self, size: f32) -> &mut Self {
        self.point_size = size.max(0.0);
        self
    }

    /// Set the point opacity, clamped to `0.0..=1.0`.
    pub fn opacity(&mut self, opacity: f32) -> &mut Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn blend_mode(&mut self, mode: BlendMode) -> &mut Self {
        self.blend_mode = mode;
        self
    }

    pub fn background(&mut self, rgb: [f32; 3]) -> &mut Self {
        self.background_color = rgb;
        self
    }

    /// Log settings that will make half the emblem invisible.
    pub fn check(&self) {
        if !self.blend_mode.shows_black() {
            log::warn!(
                "blend mode {:?} hides black particles; use BlendMode::Normal",
                self.blend_mode
            );
        }
        if self.opacity == 0.0 {
            log::warn!("point opacity is zero, nothing will be visible");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene() {
        let hints = VisualHints::default();
        assert_eq!(hints.point_size, 0.07);
        assert_eq!(hints.opacity, 0.85);
        assert!(!hints.depth_write);
        assert!(hints.blend_mode.shows_black());
        assert_eq!(hints.camera.position, [0.0, 0.0, 12.0]);
    }

    #[test]
    fn test_background_is_slate() {
        assert!((BACKGROUND[0] - 0.392).abs() < 0.001);
        assert!((BACKGROUND[1] - 0.455).abs() < 0.001);
        assert!((BACKGROUND[2] - 0.545).abs() < 0.001);
    }

    #[test]
    fn test_builder_clamps() {
        let mut hints = VisualHints::new();
        hints.opacity(3.0).point_size(-1.0).blend_mode(BlendMode::Additive);
        assert_eq!(hints.opacity, 1.0);
        assert_eq!(hints.point_size, 0.0);
        assert!(!hints.blend_mode.shows_black());
    }

    #[test]
    fn test_camera_distance_clamp() {
        let camera = CameraHints::default();
        assert_eq!(camera.clamp_distance(1.0), 5.0);
        assert_eq!(camera.clamp_distance(12.0), 12.0);
        assert_eq!(camera.clamp_distance(50.0), 20.0);
    }
}
