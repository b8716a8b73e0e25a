//! Angular velocity carried between frames for inertial rotation.

use glam::Vec3;

use super::strategy::{RotationFrame, RotationStep};

/// The rotation increment re-applied on every idle tick.
///
/// Always stored as a yaw/pitch step pair regardless of which
/// [`RotationStyle`](super::RotationStyle) produced it, so the inertia
/// path never depends on the shape a particular code path populated.
/// The default value is zero: a tick before any drag has ever happened
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularVelocity {
    steps: [RotationStep; 2],
}

impl AngularVelocity {
    /// The zero velocity.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            steps: [
                RotationStep::zero(Vec3::Y, RotationFrame::World),
                RotationStep::zero(Vec3::X, RotationFrame::World),
            ],
        }
    }

    /// Overwrite the stored steps with the latest drag increment.
    pub const fn set(&mut self, steps: [RotationStep; 2]) {
        self.steps = steps;
    }

    /// Discard any stored motion. Called when a new drag begins so it
    /// does not inherit leftover inertia.
    pub fn reset(&mut self) {
        *self = Self::zero();
    }

    /// Scale both step angles by the damping factor.
    pub fn decay(&mut self, damping: f32) {
        for step in &mut self.steps {
            step.angle *= damping;
        }
    }

    /// Combined magnitude of the two step angles, in radians.
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        self.steps[0].angle.hypot(self.steps[1].angle)
    }

    /// Whether both step angles are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.steps[0].angle == 0.0 && self.steps[1].angle == 0.0
    }

    /// The stored yaw/pitch step pair.
    #[must_use]
    pub const fn steps(&self) -> &[RotationStep; 2] {
        &self.steps
    }
}

impl Default for AngularVelocity {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::super::strategy::RotationStyle;
    use super::*;

    const DAMPING: f32 = 0.95;

    fn sample_velocity() -> AngularVelocity {
        let mut velocity = AngularVelocity::zero();
        velocity.set(RotationStyle::CameraRelative.drag_steps(
            Vec2::new(24.0, -10.0),
            0.005,
            glam::Quat::IDENTITY,
        ));
        velocity
    }

    #[test]
    fn default_is_zero() {
        assert!(AngularVelocity::default().is_zero());
        assert_eq!(AngularVelocity::default().magnitude(), 0.0);
    }

    #[test]
    fn decay_follows_geometric_sequence() {
        let mut velocity = sample_velocity();
        let initial = velocity.magnitude();
        assert!(initial > 0.0);

        for n in 1..=120 {
            velocity.decay(DAMPING);
            let expected = initial * DAMPING.powi(n);
            let got = velocity.magnitude();
            assert!(
                (got - expected).abs() <= expected * 1e-3,
                "tick {n}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn decay_is_strictly_decreasing_while_nonzero() {
        let mut velocity = sample_velocity();
        let initial = velocity.magnitude();
        let mut previous = initial;
        for _ in 0..200 {
            velocity.decay(DAMPING);
            let current = velocity.magnitude();
            assert!(current < previous);
            previous = current;
        }
        // Converging toward zero, never reaching it, never negative.
        assert!(previous > 0.0);
        assert!(previous < initial * 1e-2);
    }

    #[test]
    fn decaying_zero_stays_zero() {
        let mut velocity = AngularVelocity::zero();
        velocity.decay(DAMPING);
        assert!(velocity.is_zero());
    }

    #[test]
    fn reset_discards_motion_but_keeps_axes_sane() {
        let mut velocity = sample_velocity();
        velocity.reset();
        assert!(velocity.is_zero());
        // Axes stay unit so a later apply can never hit a zero axis.
        for step in velocity.steps() {
            assert!((step.axis.length() - 1.0).abs() < 1e-6);
        }
    }
}
