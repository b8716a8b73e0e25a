use glam::{Mat4, Quat, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Camera state: a fixed orientation and a clamped scalar distance along
/// the view axis.
///
/// The orientation is identity in this app, but the controller still
/// reads it to derive the camera-relative pitch axis, so a future
/// orbiting camera slots in without touching the rotation code.
pub struct CameraRig {
    orientation: Quat,
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    zoom_speed: f32,
    camera: Camera,
}

impl CameraRig {
    /// Rig looking at the origin from the configured starting distance.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let orientation = Quat::IDENTITY;
        let distance =
            options.distance.clamp(options.min_distance, options.max_distance);
        let camera = Camera {
            eye: orientation * Vec3::Z * distance,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        Self {
            orientation,
            distance,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            zoom_speed: options.zoom_speed,
            camera,
        }
    }

    /// Camera orientation, read by the rotation controller for the
    /// camera-relative pitch axis.
    #[must_use]
    pub const fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Current distance from the globe center.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Camera world-space position.
    #[must_use]
    pub const fn eye(&self) -> Vec3 {
        self.camera.eye
    }

    /// Move the camera along its view axis by `delta * zoom_speed`,
    /// clamped to the configured bounds. Out-of-range input clamps, it is
    /// never rejected.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);
        self.update_eye();
    }

    /// Refresh the projection aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Combined view-projection matrix for the renderer.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.camera.build_matrix()
    }

    /// Reposition the eye after a distance change.
    fn update_eye(&mut self) {
        self.camera.eye = self.orientation * Vec3::Z * self.distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(&CameraOptions::default())
    }

    #[test]
    fn starts_at_configured_distance() {
        assert_eq!(rig().distance(), 5.0);
        assert!(rig().eye().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-6));
    }

    #[test]
    fn zoom_clamps_to_floor() {
        let mut rig = rig();
        // A hard scroll inward: -2000 px at 0.002 per px would overshoot
        // to distance 1; it must land on the floor instead.
        rig.zoom(-2000.0);
        assert_eq!(rig.distance(), 3.0);
        rig.zoom(-1.0);
        assert_eq!(rig.distance(), 3.0);
    }

    #[test]
    fn zoom_clamps_to_ceiling() {
        let mut rig = rig();
        rig.zoom(1e7);
        assert_eq!(rig.distance(), 10.0);
        rig.zoom(1.0);
        assert_eq!(rig.distance(), 10.0);
    }

    #[test]
    fn zoom_never_leaves_bounds() {
        let mut rig = rig();
        for delta in [-5000.0, 300.0, -40.0, 12_000.0, -12_000.0, 0.5] {
            rig.zoom(delta);
            assert!(rig.distance() >= 3.0);
            assert!(rig.distance() <= 10.0);
        }
    }

    #[test]
    fn zoom_moves_the_eye() {
        let mut rig = rig();
        rig.zoom(500.0); // +1 distance unit
        assert!((rig.distance() - 6.0).abs() < 1e-5);
        assert!(rig.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 6.0), 1e-5));
    }

    #[test]
    fn resize_ignores_degenerate_sizes() {
        let mut rig = rig();
        rig.resize(1920, 1080);
        let vp = rig.view_proj();
        rig.resize(0, 1080);
        assert_eq!(rig.view_proj(), vp);
    }
}
