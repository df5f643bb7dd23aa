//! Tai Chi coloring of the formed volume.
//!
//! Every particle is painted one of exactly two colors, decided solely by its
//! own formed position. The emblem is built from:
//!
//! - two **eyes**: true 3D spheres of radius `0.22 R` centered at
//!   `(0, ±R/2, 0)`, black on top and white below;
//! - two **swirl** circles of radius `0.5 R` centered at `(0, ±R/2)` in the
//!   XY plane, white on top and black below;
//! - a **base split** on the sign of `x` (white for `x > 0`).
//!
//! The swirl and base ignore `z`, so the body pattern runs straight through
//! the sphere like a painted cylinder while the eyes stay spherical.
//!
//! Decision order, first match wins:
//!
//! 1. inside the top eye → black
//! 2. inside the bottom eye → white
//! 3. otherwise start from the base split, force white inside the top swirl,
//!    then force black inside the bottom swirl (bottom wins when both hold)

use glam::{Vec2, Vec3};

/// Pure black.
pub const BLACK: Vec3 = Vec3::ZERO;

/// Pure white.
pub const WHITE: Vec3 = Vec3::ONE;

/// Eye sphere radius as a fraction of the sphere radius.
pub const EYE_RATIO: f32 = 0.22;

/// Swirl circle radius as a fraction of the sphere radius.
pub const SWIRL_RATIO: f32 = 0.5;

/// One of the two emblem colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Black,
    White,
}

impl Shade {
    /// RGB value of this shade, each channel exactly 0.0 or 1.0.
    #[inline]
    pub fn rgb(self) -> Vec3 {
        match self {
            Shade::Black => BLACK,
            Shade::White => WHITE,
        }
    }

    /// The other shade.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Shade::Black => Shade::White,
            Shade::White => Shade::Black,
        }
    }

    /// Recover the shade from an RGB value, if it is exactly one of the two.
    pub fn from_rgb(rgb: Vec3) -> Option<Self> {
        if rgb == BLACK {
            Some(Shade::Black)
        } else if rgb == WHITE {
            Some(Shade::White)
        } else {
            None
        }
    }
}

/// Geometry of the emblem inside a sphere of a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emblem {
    sphere_radius: f32,
    eye_radius: f32,
    swirl_radius: f32,
}

impl Emblem {
    /// Emblem with the standard eye and swirl proportions.
    pub fn new(sphere_radius: f32) -> Self {
        Self::with_ratios(sphere_radius, EYE_RATIO, SWIRL_RATIO)
    }

    /// Emblem with custom eye and swirl proportions.
    ///
    /// With the standard proportions the two swirl circles only touch at the
    /// origin; a wider swirl makes them overlap.
    pub fn with_ratios(sphere_radius: f32, eye_ratio: f32, swirl_ratio: f32) -> Self {
        Self {
            sphere_radius,
            eye_radius: sphere_radius * eye_ratio,
            swirl_radius: sphere_radius * swirl_ratio,
        }
    }

    #[inline]
    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    #[inline]
    pub fn eye_radius(&self) -> f32 {
        self.eye_radius
    }

    #[inline]
    pub fn swirl_radius(&self) -> f32 {
        self.swirl_radius
    }

    /// Center of the top eye (and, projected, of the top swirl).
    #[inline]
    pub fn top_center(&self) -> Vec3 {
        Vec3::new(0.0, self.sphere_radius * 0.5, 0.0)
    }

    /// Center of the bottom eye (and, projected, of the bottom swirl).
    #[inline]
    pub fn bottom_center(&self) -> Vec3 {
        Vec3::new(0.0, -self.sphere_radius * 0.5, 0.0)
    }

    /// Classify a formed position.
    pub fn shade_at(&self, position: Vec3) -> Shade {
        let top = self.top_center();
        let bottom = self.bottom_center();

        if position.distance(top) < self.eye_radius {
            return Shade::Black;
        }
        if position.distance(bottom) < self.eye_radius {
            return Shade::White;
        }

        // z plays no part below this line
        let planar = position.truncate();
        let mut shade = if position.x > 0.0 {
            Shade::White
        } else {
            Shade::Black
        };
        if planar.distance(Vec2::new(top.x, top.y)) < self.swirl_radius {
            shade = Shade::White;
        }
        if planar.distance(Vec2::new(bottom.x, bottom.y)) < self.swirl_radius {
            shade = Shade::Black;
        }
        shade
    }

    /// RGB color for a formed position.
    #[inline]
    pub fn color_at(&self, position: Vec3) -> Vec3 {
        self.shade_at(position).rgb()
    }
}

/// Shade of `position` in the standard emblem of radius `sphere_radius`.
pub fn shade_at(position: Vec3, sphere_radius: f32) -> Shade {
    Emblem::new(sphere_radius).shade_at(position)
}
