use serde::{Deserialize, Serialize};

/// Camera projection and zoom parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Starting camera distance from the globe center.
    pub distance: f32,
    /// Closest the camera may zoom in.
    pub min_distance: f32,
    /// Farthest the camera may zoom out.
    pub max_distance: f32,
    /// Distance change per pixel-equivalent of scroll.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            distance: 5.0,
            min_distance: 3.0,
            max_distance: 10.0,
            zoom_speed: 0.002,
        }
    }
}
