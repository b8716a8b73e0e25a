//! Standalone globe window backed by winit.
//!
//! ```no_run
//! # use orbis::Viewer;
//! Viewer::builder()
//!     .with_title("Globe")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::GlobeEngine,
    error::OrbisError,
    input::InputEvent,
    options::Options,
    render::{GlobeRenderer, RenderContext},
};

/// Pixels of scroll represented by one wheel "line".
const LINE_HEIGHT_PX: f32 = 40.0;
/// How often the smoothed FPS is written to the debug log.
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Orbis", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Orbis".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the interactive globe.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [`OrbisError::Viewer`] if the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), OrbisError> {
        let event_loop =
            EventLoop::new().map_err(|e| OrbisError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            context: None,
            renderer: None,
            engine: GlobeEngine::new(self.options),
            last_fps_log: Instant::now(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| OrbisError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    renderer: Option<GlobeRenderer>,
    engine: GlobeEngine,
    last_fps_log: Instant,
    title: String,
}

impl ViewerApp {
    /// Render one frame, recovering from a lost/outdated surface by
    /// reconfiguring at the current window size.
    fn redraw(&mut self) {
        self.engine.tick();

        let (Some(window), Some(context), Some(renderer)) =
            (&self.window, &mut self.context, &mut self.renderer)
        else {
            return;
        };

        let snapshot = self.engine.snapshot();
        match context.get_next_frame() {
            Ok(frame) => {
                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                renderer.render(context, &view, &snapshot);
                frame.present();
            }
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let inner = window.inner_size();
                context.resize(inner.width, inner.height);
                renderer.resize(context);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        let now = Instant::now();
        if now.duration_since(self.last_fps_log) >= FPS_LOG_INTERVAL {
            log::debug!("{:.0} fps", self.engine.fps());
            self.last_fps_log = now;
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width.max(1), inner.height.max(1)),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU context: {e}");
                event_loop.exit();
                return;
            }
        };

        self.engine.resize(inner.width, inner.height);
        self.renderer = Some(GlobeRenderer::new(&context));
        self.context = Some(context);

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
                if let Some(context) = &mut self.context {
                    context.resize(size.width, size.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(context);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.engine.handle_input(InputEvent::MouseButton {
                    button: button.into(),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.engine.handle_input(InputEvent::CursorLeft);
            }

            WindowEvent::Touch(touch) => {
                self.engine.handle_input(InputEvent::Touch {
                    phase: touch.phase.into(),
                    id: touch.id,
                    x: touch.location.x as f32,
                    y: touch.location.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // Positive scroll-up zooms in, so distance moves opposite
                // to the wheel direction.
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.engine.handle_input(InputEvent::Scroll { delta });
            }

            _ => (),
        }
    }
}
