//! Converts raw pointer/touch events into engine commands.
//!
//! The `DragTracker` owns all transient drag state (active flag, last
//! sampled position, which touch point is driving). It is the only thing
//! that sits between raw window events and the engine's
//! [`execute`](crate::engine::GlobeEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton, TouchPhase};
use crate::engine::GlobeCommand;

/// Drag state machine over normalized mouse and touch streams.
///
/// Mouse and touch share identical downstream semantics: a drag begins
/// (discarding leftover inertia), emits a pixel delta per move sample,
/// and ends leaving the last recorded velocity intact so inertia can take
/// over. Only the first touch point drives a drag; stray move events with
/// no prior start are ignored.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    /// Whether a drag is currently active.
    active: bool,
    /// Position of the previous drag sample, while active.
    last_position: Option<Vec2>,
    /// Identifier of the driving touch point (`None` for a mouse drag).
    touch_id: Option<u64>,
    /// Last known cursor position, tracked even while not dragging so a
    /// button press can anchor the drag where the cursor already is.
    cursor: Vec2,
}

impl DragTracker {
    /// Create a tracker with no active drag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            last_position: None,
            touch_id: None,
            cursor: Vec2::ZERO,
        }
    }

    /// Whether a drag is currently active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Never panics; events that make no sense in the current state
    /// (moves with no prior start, unknown touch ids, releases without a
    /// press) are silently ignored.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<GlobeCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::CursorLeft => {
                // Leaving the window ends a mouse drag like a release.
                if self.active && self.touch_id.is_none() {
                    self.end_drag();
                }
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Touch { phase, id, x, y } => {
                self.handle_touch(phase, id, Vec2::new(x, y))
            }
            InputEvent::Scroll { delta } => Some(GlobeCommand::Zoom { delta }),
        }
    }

    /// Cursor moved — emit a drag delta when a mouse drag is active.
    fn handle_cursor_moved(&mut self, position: Vec2) -> Option<GlobeCommand> {
        self.cursor = position;
        if !self.active || self.touch_id.is_some() {
            return None;
        }
        self.step(position)
    }

    /// Mouse button press/release for the primary button.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<GlobeCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            if self.active {
                return None;
            }
            self.active = true;
            self.touch_id = None;
            self.last_position = Some(self.cursor);
            return Some(GlobeCommand::BeginDrag);
        }

        if self.active && self.touch_id.is_none() {
            self.end_drag();
        }
        None
    }

    /// Touch lifecycle — the first touch point becomes the driver, later
    /// fingers are ignored until it lifts.
    fn handle_touch(
        &mut self,
        phase: TouchPhase,
        id: u64,
        position: Vec2,
    ) -> Option<GlobeCommand> {
        match phase {
            TouchPhase::Started => {
                if self.active {
                    return None;
                }
                self.active = true;
                self.touch_id = Some(id);
                self.last_position = Some(position);
                Some(GlobeCommand::BeginDrag)
            }
            TouchPhase::Moved => {
                if !self.active || self.touch_id != Some(id) {
                    return None;
                }
                self.step(position)
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.touch_id == Some(id) {
                    self.end_drag();
                }
                None
            }
        }
    }

    /// Advance the drag by one sample and emit the resulting delta.
    fn step(&mut self, position: Vec2) -> Option<GlobeCommand> {
        let delta = self
            .last_position
            .map_or(Vec2::ZERO, |last| position - last);
        self.last_position = Some(position);
        Some(GlobeCommand::Rotate { delta })
    }

    /// Clear drag state. The engine's recorded velocity is untouched so
    /// inertia continues from the last sampled delta.
    fn end_drag(&mut self) {
        self.active = false;
        self.last_position = None;
        self.touch_id = None;
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn left(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    fn touch(phase: TouchPhase, id: u64, x: f32, y: f32) -> InputEvent {
        InputEvent::Touch { phase, id, x, y }
    }

    #[test]
    fn move_before_start_is_ignored() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.handle_event(moved(50.0, 50.0)), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn press_anchors_at_current_cursor() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(moved(100.0, 200.0));
        assert_eq!(
            tracker.handle_event(left(true)),
            Some(GlobeCommand::BeginDrag)
        );
        assert!(tracker.is_dragging());

        // First move after the press measures from the press position,
        // not from some stale origin.
        assert_eq!(
            tracker.handle_event(moved(110.0, 196.0)),
            Some(GlobeCommand::Rotate {
                delta: Vec2::new(10.0, -4.0)
            })
        );
        // Subsequent deltas chain sample to sample.
        assert_eq!(
            tracker.handle_event(moved(111.0, 196.0)),
            Some(GlobeCommand::Rotate {
                delta: Vec2::new(1.0, 0.0)
            })
        );
    }

    #[test]
    fn release_ends_drag() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(left(true));
        assert_eq!(tracker.handle_event(left(false)), None);
        assert!(!tracker.is_dragging());
        // Moves after release are ignored again.
        assert_eq!(tracker.handle_event(moved(5.0, 5.0)), None);
    }

    #[test]
    fn cursor_leave_ends_mouse_drag() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(left(true));
        assert_eq!(tracker.handle_event(InputEvent::CursorLeft), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle_event(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            }),
            None
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn first_touch_point_drives_the_drag() {
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle_event(touch(TouchPhase::Started, 7, 10.0, 10.0)),
            Some(GlobeCommand::BeginDrag)
        );

        // A second finger neither restarts nor moves the drag.
        assert_eq!(
            tracker.handle_event(touch(TouchPhase::Started, 8, 90.0, 90.0)),
            None
        );
        assert_eq!(
            tracker.handle_event(touch(TouchPhase::Moved, 8, 95.0, 90.0)),
            None
        );

        assert_eq!(
            tracker.handle_event(touch(TouchPhase::Moved, 7, 13.0, 14.0)),
            Some(GlobeCommand::Rotate {
                delta: Vec2::new(3.0, 4.0)
            })
        );

        // Lifting the second finger changes nothing; lifting the driver
        // ends the drag.
        assert_eq!(
            tracker.handle_event(touch(TouchPhase::Ended, 8, 95.0, 90.0)),
            None
        );
        assert!(tracker.is_dragging());
        assert_eq!(
            tracker.handle_event(touch(TouchPhase::Ended, 7, 13.0, 14.0)),
            None
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn touch_cancel_ends_drag() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(touch(TouchPhase::Started, 1, 0.0, 0.0));
        let _ = tracker.handle_event(touch(TouchPhase::Cancelled, 1, 0.0, 0.0));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn cursor_moves_do_not_feed_a_touch_drag() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(touch(TouchPhase::Started, 1, 0.0, 0.0));
        assert_eq!(tracker.handle_event(moved(40.0, 40.0)), None);
    }

    #[test]
    fn scroll_passes_through_regardless_of_drag_state() {
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle_event(InputEvent::Scroll { delta: 12.0 }),
            Some(GlobeCommand::Zoom { delta: 12.0 })
        );
        let _ = tracker.handle_event(left(true));
        assert_eq!(
            tracker.handle_event(InputEvent::Scroll { delta: -3.0 }),
            Some(GlobeCommand::Zoom { delta: -3.0 })
        );
        assert!(tracker.is_dragging());
    }
}
