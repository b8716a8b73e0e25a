//! Small shared utilities.

/// Per-frame timing and FPS tracking.
pub mod frame_timing;
