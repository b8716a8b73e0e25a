// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast allowances — pixel coordinates and buffer sizes cast intentionally
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
// Float comparison against exact sentinel values (0.0) is intentional
#![allow(clippy::float_cmp)]

//! Interactive 3D globe with inertial drag rotation.
//!
//! Orbis renders a rotatable sphere with an atmospheric shell. Dragging
//! with the mouse or a finger rotates the globe directly; releasing lets
//! it coast on the recorded angular velocity, decaying a little every
//! frame. The scroll wheel moves the camera in and out between fixed
//! bounds.
//!
//! # Key entry points
//!
//! - [`engine::GlobeEngine`] - input dispatch and per-frame state updates
//! - [`controller::OrientationController`] - the drag/inertia rotation core
//! - [`options::Options`] - startup configuration (interaction, camera)
//! - [`viewer::Viewer`] (feature `viewer`) - standalone winit window
//!
//! # Architecture
//!
//! Raw window events are converted to platform-agnostic
//! [`InputEvent`](input::InputEvent) values and fed to the engine, which
//! owns a [`DragTracker`](input::DragTracker) (the drag state machine) and
//! an [`OrientationController`](controller::OrientationController) (the
//! orientation pair plus angular velocity). Each frame the engine applies
//! either drag rotation (synchronously, from move events) or one decaying
//! inertial step, then the renderer reads a single consistent
//! [`RenderSnapshot`](engine::RenderSnapshot) and draws.

pub mod camera;
pub mod controller;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{GlobeCommand, GlobeEngine, RenderSnapshot};
pub use error::OrbisError;
pub use input::{InputEvent, MouseButton, TouchPhase};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
