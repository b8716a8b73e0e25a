use serde::{Deserialize, Serialize};

use crate::controller::RotationStyle;

/// Drag-rotation tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionOptions {
    /// Radians of rotation per pixel of pointer movement.
    pub rotate_speed: f32,
    /// Multiplicative angular-velocity decay per idle frame, in (0, 1).
    pub damping: f32,
    /// How pointer deltas map to rotation axes.
    pub rotation_style: RotationStyle,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            damping: 0.95,
            rotation_style: RotationStyle::CameraRelative,
        }
    }
}
