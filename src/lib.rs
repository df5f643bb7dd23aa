//! # Tai Chi Field
//!
//! Simulation core for a volumetric Tai Chi particle sphere.
//!
//! Thousands of points either coalesce into a sphere painted with the black
//! and white Tai Chi emblem, or disperse into a slowly orbiting cloud five
//! times its size. The crate owns the numbers only: it generates the
//! particles once, then advances their live positions every frame. Drawing,
//! camera and input belong to whatever renderer consumes the buffers.
//!
//! ## Quick Start
//!
//! ```
//! use taichi_field::prelude::*;
//!
//! let mut session = Simulation::new()
//!     .with_particle_count(15_000)
//!     .with_sphere_radius(4.5)
//!     .build()
//!     .unwrap();
//!
//! // Once per rendered frame:
//! session.set_mode(Mode::Scatter);
//! let frame = session.frame();
//! assert_eq!(frame.positions.len(), 15_000 * 3);
//! // upload frame.positions / frame.colors, apply frame.rotation
//! ```
//!
//! ## Core Concepts
//!
//! ### Field
//!
//! [`ParticleField`] holds four parallel buffers: initial (scattered)
//! positions, formed target positions, colors, and live positions. Only live
//! positions change after generation.
//!
//! ### Coloring
//!
//! Each color is pure black or pure white, a function of that particle's
//! formed position alone. See [`palette`] for the eye and swirl rules.
//!
//! ### Stepping
//!
//! Every frame each particle computes a moving target for the current
//! [`Mode`] and moves a fixed fraction of the way there. Elapsed time is an
//! explicit argument, so stepping is deterministic. See [`stepper`].
//!
//! ## Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `parallel` | Runs the per-particle loop on rayon |

pub mod config;
pub mod error;
pub mod field;
pub mod mode;
pub mod palette;
pub mod rotation;
pub mod simulation;
pub mod spawn;
pub mod stepper;
pub mod time;
pub mod visuals;

pub use bytemuck;
pub use config::{FieldConfig, MotionConfig};
pub use error::{ConfigError, FieldError};
pub use field::{FieldStats, ParticleField};
pub use glam::{Quat, Vec3};
pub use mode::Mode;
pub use palette::{Emblem, Shade};
pub use rotation::Rotation;
pub use simulation::{Frame, Session, Simulation};
pub use spawn::Sampler;
pub use stepper::Stepper;
pub use visuals::{BlendMode, CameraHints, VisualHints};

/// Convenient re-exports for common usage.
///
/// ```
/// use taichi_field::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{FieldConfig, MotionConfig};
    pub use crate::error::{ConfigError, FieldError};
    pub use crate::field::{FieldStats, ParticleField};
    pub use crate::mode::Mode;
    pub use crate::palette::{Emblem, Shade};
    pub use crate::rotation::Rotation;
    pub use crate::simulation::{Frame, Session, Simulation};
    pub use crate::spawn::Sampler;
    pub use crate::stepper::Stepper;
    pub use crate::time::Time;
    pub use crate::visuals::{BlendMode, VisualHints};
    pub use crate::Vec3;
}
