//! Orientation ownership and the drag/inertia rotation core.

/// Rotation steps and pointer-to-axis mapping styles.
pub mod strategy;
/// Decaying angular velocity storage.
pub mod velocity;

use glam::{Quat, Vec2};
pub use strategy::{RotationFrame, RotationStep, RotationStyle};
pub use velocity::AngularVelocity;

use crate::options::InteractionOptions;

/// Owns the orientation of the globe/atmosphere pair and the angular
/// velocity that keeps them spinning after a drag ends.
///
/// Exactly two modes exist: *dragging*, where each pointer delta is
/// applied immediately and recorded, and *idle*, where the recorded
/// increment is replayed and damped once per frame. Both paths finish by
/// mirroring the globe's orientation onto the atmosphere shell.
pub struct OrientationController {
    globe: Quat,
    atmosphere: Quat,
    velocity: AngularVelocity,
    style: RotationStyle,
    rotate_speed: f32,
    damping: f32,
}

impl OrientationController {
    /// Controller at rest pose with zero velocity.
    #[must_use]
    pub fn new(options: &InteractionOptions) -> Self {
        Self {
            globe: Quat::IDENTITY,
            atmosphere: Quat::IDENTITY,
            velocity: AngularVelocity::zero(),
            style: options.rotation_style,
            rotate_speed: options.rotate_speed,
            damping: options.damping,
        }
    }

    /// Current globe orientation.
    #[must_use]
    pub const fn globe_orientation(&self) -> Quat {
        self.globe
    }

    /// Current atmosphere shell orientation. Always equal to the globe's;
    /// the shell has no rotation state of its own.
    #[must_use]
    pub const fn atmosphere_orientation(&self) -> Quat {
        self.atmosphere
    }

    /// The velocity that will drive the next inertial ticks.
    #[must_use]
    pub const fn velocity(&self) -> &AngularVelocity {
        &self.velocity
    }

    /// Discard stored velocity. Called at drag-start so a fresh drag does
    /// not inherit leftover inertia.
    pub fn reset_velocity(&mut self) {
        self.velocity.reset();
    }

    /// Rotate from a pointer delta and record the increment for inertia.
    ///
    /// `camera_orientation` supplies the camera-relative pitch axis; the
    /// local-axes style ignores it.
    pub fn apply_drag(&mut self, delta: Vec2, camera_orientation: Quat) {
        let steps =
            self.style
                .drag_steps(delta, self.rotate_speed, camera_orientation);
        for step in &steps {
            self.globe = step.apply(self.globe);
        }
        self.velocity.set(steps);
        self.sync_atmosphere();
    }

    /// One idle-frame inertial step: replay the stored increment exactly
    /// as a drag step would, then damp it. Zero velocity is a no-op, so
    /// ticking before any drag has ever happened is safe.
    pub fn apply_inertia(&mut self) {
        if self.velocity.is_zero() {
            return;
        }
        for step in self.velocity.steps() {
            self.globe = step.apply(self.globe);
        }
        self.velocity.decay(self.damping);
        self.sync_atmosphere();
    }

    /// Mirror the globe orientation onto the atmosphere shell.
    fn sync_atmosphere(&mut self) {
        self.atmosphere = self.globe;
    }
}
