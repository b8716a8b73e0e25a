//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a mouse gesture, a
//! touch, or a programmatic call — is represented as a `GlobeCommand`.
//! Consumers construct commands and pass them to
//! [`GlobeEngine::execute`](super::GlobeEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — mouse, touch,
/// or API all look identical:
///
/// ```ignore
/// engine.execute(GlobeCommand::Rotate { delta: Vec2::new(4.0, 0.0) });
/// engine.execute(GlobeCommand::Zoom { delta: -120.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobeCommand {
    /// A drag gesture began; stored angular velocity is discarded so the
    /// new drag does not inherit leftover inertia.
    BeginDrag,

    /// Rotate the globe by a pointer delta.
    Rotate {
        /// Horizontal and vertical drag delta in pixels.
        delta: Vec2,
    },

    /// Move the camera along its view axis (positive = away from the
    /// globe).
    Zoom {
        /// Scroll amount in pixel-equivalent units.
        delta: f32,
    },
}
