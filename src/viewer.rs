//! Standalone interaction window backed by winit.
//!
//! The window drives a [`Camera`] from mouse and keyboard input and keeps a
//! [`CameraUniform`] snapshot current on every redraw, which is the hand-off
//! point for a renderer. Nothing is drawn here.
//!
//! ```no_run
//! # use terraview::Viewer;
//! Viewer::builder()
//!     .with_title("Terrain")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    camera::{Camera, CameraCommand, CameraUniform},
    error::TerraviewError,
    input::{InputEvent, InputProcessor, MouseButton},
    options::Options,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "Terraview".
    fn new() -> Self {
        Self {
            options: None,
            title: "Terraview".into(),
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

/// A standalone window whose pointer and keys drive a trackball camera.
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

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), TerraviewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TerraviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            camera: self.options.build_camera(),
            input: InputProcessor::with_key_bindings(
                self.options.keybindings.clone(),
            ),
            uniform: CameraUniform::new(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TerraviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    camera: Camera,
    input: InputProcessor,
    uniform: CameraUniform,
    title: String,
}

impl ViewerApp {
    /// Feed one event through the input processor and apply the result.
    fn dispatch(&mut self, event: InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.apply(cmd);
        }
    }

    fn apply(&mut self, cmd: CameraCommand) {
        log::trace!("camera command {cmd:?}");
        self.camera.execute(cmd);
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn dispatch_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.dispatch(InputEvent::Resized {
            width: size.width.max(1),
            height: size.height.max(1),
        });
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        log::info!("window created at {}x{}", inner.width, inner.height);
        self.window = Some(window);

        self.dispatch_resize(inner);
        self.apply(CameraCommand::Reset);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => self.dispatch_resize(size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(inner) = self.window.as_ref().map(|w| w.inner_size()) {
                    self.dispatch_resize(inner);
                }
            }

            WindowEvent::RedrawRequested => {
                self.uniform.update(&self.camera);
                log::trace!(
                    "frame: z range [{:.3}, {:.3}], {} bytes of camera uniform",
                    self.uniform.z_min,
                    self.uniform.z_max,
                    self.uniform.as_bytes().len(),
                );
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.dispatch(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.dispatch(InputEvent::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let key_str = format!("{code:?}");
                if let Some(cmd) = self.input.handle_key_press(&key_str) {
                    log::debug!("key {key_str} -> {cmd:?}");
                    self.apply(cmd);
                }
            }

            _ => (),
        }
    }
}
