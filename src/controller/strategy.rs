//! Incremental rotation steps and the two pointer-to-axis mapping styles.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Which frame a [`RotationStep`]'s axis lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationFrame {
    /// Axis fixed in world space; the step composes on the world side.
    World,
    /// Axis fixed in the object's own frame; the step composes on the
    /// object side.
    Local,
}

/// One incremental rotation: a unit axis, a signed angle, and the frame
/// the axis lives in.
///
/// Keeping the frame tag on the step means a stored step replays
/// identically wherever it is applied — the inertia path never has to
/// know which style produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    /// Unit rotation axis.
    pub axis: Vec3,
    /// Signed rotation angle in radians.
    pub angle: f32,
    /// Which side of the orientation the step composes on.
    pub frame: RotationFrame,
}

impl RotationStep {
    /// A zero-angle (identity) step around the given axis.
    #[must_use]
    pub const fn zero(axis: Vec3, frame: RotationFrame) -> Self {
        Self {
            axis,
            angle: 0.0,
            frame,
        }
    }

    /// Compose this step onto an orientation.
    ///
    /// World-frame steps pre-multiply, local-frame steps post-multiply.
    /// The result is re-normalized so long sequences of small increments
    /// stay unit length.
    #[must_use]
    pub fn apply(&self, orientation: Quat) -> Quat {
        let rot = Quat::from_axis_angle(self.axis, self.angle);
        let composed = match self.frame {
            RotationFrame::World => rot * orientation,
            RotationFrame::Local => orientation * rot,
        };
        composed.normalize()
    }
}

/// How pointer deltas map to rotation axes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationStyle {
    /// Rotate around the object's own Y then X axes.
    ///
    /// Cheap, but the axes tilt along with the globe: once pitched, a
    /// horizontal drag no longer spins around the vertical. Yaw is
    /// applied before pitch and the two do not commute, so repeated
    /// tilted drags skew visibly.
    LocalAxes,
    /// Yaw around world up, pitch around the camera's current right
    /// vector. Horizontal drags stay horizontal at any tilt.
    #[default]
    CameraRelative,
}

impl RotationStyle {
    /// Map a pointer delta to a yaw step and a pitch step, applied in
    /// that order. `camera_orientation` supplies the pitch axis for the
    /// camera-relative style and is ignored by the local style.
    #[must_use]
    pub fn drag_steps(
        self,
        delta: Vec2,
        rotate_speed: f32,
        camera_orientation: Quat,
    ) -> [RotationStep; 2] {
        let yaw = delta.x * rotate_speed;
        let pitch = delta.y * rotate_speed;
        match self {
            Self::LocalAxes => [
                RotationStep {
                    axis: Vec3::Y,
                    angle: yaw,
                    frame: RotationFrame::Local,
                },
                RotationStep {
                    axis: Vec3::X,
                    angle: pitch,
                    frame: RotationFrame::Local,
                },
            ],
            Self::CameraRelative => [
                RotationStep {
                    axis: Vec3::Y,
                    angle: yaw,
                    frame: RotationFrame::World,
                },
                RotationStep {
                    axis: camera_orientation * Vec3::X,
                    angle: pitch,
                    frame: RotationFrame::World,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::EulerRot;

    use super::*;

    const ROTATE_SPEED: f32 = 0.005;

    fn apply_steps(steps: &[RotationStep; 2], orientation: Quat) -> Quat {
        steps[1].apply(steps[0].apply(orientation))
    }

    #[test]
    fn camera_relative_horizontal_drag_is_pure_world_yaw() {
        // From an arbitrary tilted starting orientation, a purely
        // horizontal drag must rotate around world up by exactly
        // delta.x * rotate_speed.
        let start = Quat::from_euler(EulerRot::XYZ, 0.9, -0.4, 0.2);
        let steps = RotationStyle::CameraRelative.drag_steps(
            Vec2::new(40.0, 0.0),
            ROTATE_SPEED,
            Quat::IDENTITY,
        );
        let rotated = apply_steps(&steps, start);
        let expected = Quat::from_rotation_y(40.0 * ROTATE_SPEED) * start;
        assert!(rotated.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn local_axes_horizontal_drag_skews_once_tilted() {
        // The same horizontal drag through the local style diverges from
        // a world-up rotation as soon as the globe is pitched.
        let start = Quat::from_rotation_x(1.0);
        let steps = RotationStyle::LocalAxes.drag_steps(
            Vec2::new(40.0, 0.0),
            ROTATE_SPEED,
            Quat::IDENTITY,
        );
        let rotated = apply_steps(&steps, start);
        let world_yaw = Quat::from_rotation_y(40.0 * ROTATE_SPEED) * start;
        assert!(!rotated.abs_diff_eq(world_yaw, 1e-4));
    }

    #[test]
    fn local_axes_match_world_axes_from_rest() {
        // Before any tilt the two styles agree.
        let steps_local = RotationStyle::LocalAxes.drag_steps(
            Vec2::new(12.0, 0.0),
            ROTATE_SPEED,
            Quat::IDENTITY,
        );
        let steps_cam = RotationStyle::CameraRelative.drag_steps(
            Vec2::new(12.0, 0.0),
            ROTATE_SPEED,
            Quat::IDENTITY,
        );
        let a = apply_steps(&steps_local, Quat::IDENTITY);
        let b = apply_steps(&steps_cam, Quat::IDENTITY);
        assert!(a.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn pitch_axis_follows_the_camera() {
        // With the camera rolled a quarter turn around its view axis,
        // the pitch axis is the camera's right vector, not world X.
        let camera = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let steps = RotationStyle::CameraRelative.drag_steps(
            Vec2::new(0.0, 20.0),
            ROTATE_SPEED,
            camera,
        );
        assert!(steps[1].axis.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn step_angles_scale_with_delta_and_speed() {
        let steps = RotationStyle::CameraRelative.drag_steps(
            Vec2::new(10.0, -6.0),
            ROTATE_SPEED,
            Quat::IDENTITY,
        );
        assert!((steps[0].angle - 0.05).abs() < 1e-7);
        assert!((steps[1].angle + 0.03).abs() < 1e-7);
    }

    #[test]
    fn applying_a_step_keeps_unit_length() {
        let step = RotationStep {
            axis: Vec3::Y,
            angle: 0.3,
            frame: RotationFrame::World,
        };
        let mut q = Quat::from_rotation_x(0.5);
        for _ in 0..10_000 {
            q = step.apply(q);
        }
        assert!((q.length() - 1.0).abs() < 1e-4);
    }
}
