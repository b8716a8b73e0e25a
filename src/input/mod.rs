//! Input handling: platform-agnostic event types and the drag state
//! machine that converts raw pointer/touch streams into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Drag state machine and delta emission.
pub mod tracker;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use tracker::DragTracker;
