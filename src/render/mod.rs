//! The fixed rendering backend.
//!
//! Deliberately thin: once per frame it accepts the engine's
//! [`RenderSnapshot`](crate::engine::RenderSnapshot) — two model
//! matrices, a view-projection, and the eye position — and draws the
//! globe and its atmosphere shell. It owns no interaction state.

/// wgpu device/queue/surface ownership.
pub mod context;
/// Globe + atmosphere render pipelines.
pub mod globe;
/// UV-sphere mesh generation.
pub mod mesh;

pub use context::RenderContext;
pub use globe::GlobeRenderer;
