//! Per-frame orchestration: input dispatch, drag/idle mode selection,
//! and the render snapshot.

mod command;

pub use command::GlobeCommand;
use glam::{Mat4, Vec3};

use crate::camera::CameraRig;
use crate::controller::OrientationController;
use crate::input::{DragTracker, InputEvent};
use crate::options::Options;
use crate::util::frame_timing::FrameTiming;

/// Radius of the globe sphere in world units.
pub const GLOBE_RADIUS: f32 = 2.0;
/// Radius of the atmosphere shell. Slightly larger than the globe so it
/// reads as a halo around the silhouette.
pub const ATMOSPHERE_RADIUS: f32 = 2.1;

/// Everything the renderer reads, captured once per frame after all
/// state updates for that frame have been applied.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot {
    /// Globe model matrix.
    pub globe_model: Mat4,
    /// Atmosphere shell model matrix.
    pub atmosphere_model: Mat4,
    /// Combined view-projection matrix.
    pub view_proj: Mat4,
    /// Camera world-space position.
    pub eye: Vec3,
}

/// The interactive globe state machine.
///
/// Owns the drag tracker, the orientation controller, and the camera
/// rig. Raw window events arrive via [`handle_input`](Self::handle_input)
/// and are applied synchronously; [`tick`](Self::tick) runs once per
/// animation frame and applies the idle inertial step when no drag is
/// active. The host scheduler drives the cadence — the engine holds no
/// timing logic beyond the damping multiplier.
pub struct GlobeEngine {
    tracker: DragTracker,
    controller: OrientationController,
    rig: CameraRig,
    frame_timing: FrameTiming,
    options: Options,
}

impl GlobeEngine {
    /// Engine at rest pose with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            tracker: DragTracker::new(),
            controller: OrientationController::new(&options.interaction),
            rig: CameraRig::new(&options.camera),
            frame_timing: FrameTiming::new(),
            options,
        }
    }

    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw
    /// window events as [`InputEvent`] variants; the engine internally
    /// dispatches to drag tracking, rotation, and zoom.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.tracker.handle_event(event) {
            self.execute(command);
        }
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: GlobeCommand) {
        match command {
            GlobeCommand::BeginDrag => {
                log::debug!("drag started, inertia discarded");
                self.controller.reset_velocity();
            }
            GlobeCommand::Rotate { delta } => {
                self.controller.apply_drag(delta, self.rig.orientation());
            }
            GlobeCommand::Zoom { delta } => self.rig.zoom(delta),
        }
    }

    /// Advance one animation frame.
    ///
    /// Drag rotation is applied synchronously by the move events
    /// themselves, so the tick only has to handle the idle mode: replay
    /// and damp the stored velocity when no drag is active.
    pub fn tick(&mut self) {
        if !self.tracker.is_dragging() {
            self.controller.apply_inertia();
        }
        self.frame_timing.end_frame();
    }

    /// Refresh the camera aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }

    /// Capture the state the renderer needs for this frame.
    ///
    /// Called once per frame, after [`tick`](Self::tick) and any input
    /// for the frame, so the renderer always sees a consistent
    /// post-update state.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            globe_model: Mat4::from_quat(self.controller.globe_orientation()),
            atmosphere_model: Mat4::from_quat(
                self.controller.atmosphere_orientation(),
            ),
            view_proj: self.rig.view_proj(),
            eye: self.rig.eye(),
        }
    }

    /// Whether a drag is currently active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Smoothed frames per second, updated by [`tick`](Self::tick).
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// The options the engine was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// The rotation core, exposed for read access to orientations and
    /// velocity.
    #[must_use]
    pub const fn controller(&self) -> &OrientationController {
        &self.controller
    }

    /// Current camera distance from the globe center.
    #[must_use]
    pub const fn camera_distance(&self) -> f32 {
        self.rig.distance()
    }
}

impl Default for GlobeEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::input::{MouseButton, TouchPhase};

    fn press() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }
    }

    fn release() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn stray_moves_never_rotate() {
        let mut engine = GlobeEngine::default();
        engine.handle_input(moved(500.0, 300.0));
        engine.tick();
        let snap = engine.snapshot();
        assert_eq!(snap.globe_model, Mat4::IDENTITY);
        assert_eq!(snap.atmosphere_model, Mat4::IDENTITY);
    }

    #[test]
    fn drag_rotates_and_release_coasts() {
        let mut engine = GlobeEngine::default();
        engine.handle_input(moved(100.0, 100.0));
        engine.handle_input(press());
        engine.handle_input(moved(140.0, 100.0));

        let after_drag =
            engine.controller().globe_orientation();
        let expected = Quat::from_rotation_y(40.0 * 0.005);
        assert!(after_drag.abs_diff_eq(expected, 1e-6));

        // While dragging, ticks do not apply inertia.
        engine.tick();
        assert!(engine
            .controller()
            .globe_orientation()
            .abs_diff_eq(after_drag, 1e-6));

        // After release the globe keeps turning, a little less each tick.
        engine.handle_input(release());
        engine.tick();
        let coasted = engine.controller().globe_orientation();
        assert!(!coasted.abs_diff_eq(after_drag, 1e-7));
        assert!(coasted.abs_diff_eq(
            Quat::from_rotation_y(80.0 * 0.005),
            1e-5
        ));
    }

    #[test]
    fn tap_without_movement_leaves_the_globe_still() {
        let mut engine = GlobeEngine::default();
        // Spin it up first.
        engine.handle_input(press());
        engine.handle_input(moved(80.0, 0.0));
        engine.handle_input(release());
        engine.tick();

        // A touch tap (start + end, no move) must kill the inertia.
        engine.handle_input(InputEvent::Touch {
            phase: TouchPhase::Started,
            id: 3,
            x: 10.0,
            y: 10.0,
        });
        engine.handle_input(InputEvent::Touch {
            phase: TouchPhase::Ended,
            id: 3,
            x: 10.0,
            y: 10.0,
        });
        let frozen = engine.controller().globe_orientation();
        for _ in 0..10 {
            engine.tick();
        }
        assert_eq!(engine.controller().globe_orientation(), frozen);
    }

    #[test]
    fn atmosphere_model_always_matches_globe_model() {
        let mut engine = GlobeEngine::default();
        engine.handle_input(press());
        engine.handle_input(moved(33.0, -21.0));
        engine.handle_input(release());
        for _ in 0..20 {
            engine.tick();
            let snap = engine.snapshot();
            assert_eq!(snap.globe_model, snap.atmosphere_model);
        }
    }

    #[test]
    fn zoom_commands_clamp_at_the_bounds() {
        let mut engine = GlobeEngine::default();
        engine.handle_input(InputEvent::Scroll { delta: -2000.0 });
        assert_eq!(engine.camera_distance(), 3.0);
        engine.handle_input(InputEvent::Scroll { delta: 1e8 });
        assert_eq!(engine.camera_distance(), 10.0);
    }

    #[test]
    fn snapshot_model_matches_orientation() {
        let mut engine = GlobeEngine::default();
        engine.handle_input(press());
        engine.handle_input(moved(25.0, 15.0));
        let snap = engine.snapshot();
        let expected =
            Mat4::from_quat(engine.controller().globe_orientation());
        assert_eq!(snap.globe_model, expected);
    }
}
