//! Whole-field rotation.
//!
//! The renderer applies one rotation to the entire point cloud. It is kept
//! here as plain angles so the simulation stays free of any scene graph.

use crate::mode::Mode;
use glam::{EulerRot, Mat4, Quat};

const FORM_YAW_SPEED: f32 = 0.003;
const SCATTER_YAW_SPEED: f32 = 0.001;
const PITCH_SWAY_FREQUENCY: f32 = 0.2;
const PITCH_SWAY_AMPLITUDE: f32 = 0.1;
const FORM_ROLL_RATE: f32 = 0.05;
const SCATTER_ROLL: f32 = 0.2;
const SCATTER_ROLL_RATE: f32 = 0.02;

/// Euler angles in radians, applied in XYZ order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    /// Rotation about X.
    pub pitch: f32,
    /// Rotation about Y. Accumulates without wrapping.
    pub yaw: f32,
    /// Rotation about Z.
    pub roll: f32,
}

impl Rotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame.
    ///
    /// - form: yaw += 0.003, pitch = sin(0.2 t) · 0.1, roll eases to 0 at 0.05
    /// - scatter: yaw += 0.001, roll eases to 0.2 at 0.02, pitch untouched
    pub fn advance(&mut self, mode: Mode, elapsed: f32) {
        match mode {
            Mode::Form => {
                self.yaw += FORM_YAW_SPEED;
                self.pitch = (elapsed * PITCH_SWAY_FREQUENCY).sin() * PITCH_SWAY_AMPLITUDE;
                self.roll = lerp(self.roll, 0.0, FORM_ROLL_RATE);
            }
            Mode::Scatter => {
                self.yaw += SCATTER_YAW_SPEED;
                self.roll = lerp(self.roll, SCATTER_ROLL, SCATTER_ROLL_RATE);
            }
        }
    }

    /// Angles as `[pitch, yaw, roll]`.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.pitch, self.yaw, self.roll]
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    /// Model matrix for the point cloud.
    pub fn to_matrix(self) -> Mat4 {
        Mat4::from_quat(self.to_quat())
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
