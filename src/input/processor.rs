//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held button, modifier keys, viewport height) and the key-binding map.
//! It is the only thing that sits between raw window events and
//! [`Camera::execute`](crate::camera::Camera::execute).

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::camera::CameraCommand;
use crate::math::Vec2;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`CameraCommand`]s.
///
/// Window coordinates arrive Y-down with the origin at the top-left; the
/// commands it emits carry Y-up points with the origin at the bottom-left,
/// which is what the camera expects.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     camera.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyI") {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last cursor position, window coordinates.
    cursor: Vec2,
    /// Button that started the current drag, if any.
    held: Option<MouseButton>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Viewport height used to flip Y.
    height: u32,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    ///
    /// The viewport height starts at zero; feed an
    /// [`InputEvent::Resized`] before the first pointer event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in window pixels (Y down).
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Button held for the current drag.
    #[must_use]
    pub fn held_button(&self) -> Option<MouseButton> {
        self.held
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<CameraCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                self.held.map(|_| CameraCommand::Drag(self.camera_point()))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::Resized { width, height } => {
                self.height = height;
                Some(CameraCommand::Resize { width, height })
            }
        }
    }

    /// Press starts a gesture for that button; releasing it ends the drag.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if !pressed {
            if self.held == Some(button) {
                self.held = None;
            }
            return None;
        }

        self.held = Some(button);
        let p = self.camera_point();
        Some(match button {
            MouseButton::Left if self.shift_pressed => CameraCommand::BeginPan(p),
            MouseButton::Left => CameraCommand::BeginRotate(p),
            MouseButton::Middle => CameraCommand::BeginDolly(p),
            MouseButton::Right => CameraCommand::BeginPan(p),
        })
    }

    /// Cursor in camera coordinates (origin bottom-left, Y up).
    fn camera_point(&self) -> Vec2 {
        Vec2::new(self.cursor.x(), self.height as f32 - self.cursor.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FOVY_STEP;

    fn sized(width: u32, height: u32) -> InputProcessor {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::Resized { width, height });
        input
    }

    fn press(input: &mut InputProcessor, button: MouseButton) -> Option<CameraCommand> {
        input.handle_event(InputEvent::MouseButton {
            button,
            pressed: true,
        })
    }

    #[test]
    fn resize_is_forwarded() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Resized {
                width: 800,
                height: 600
            }),
            Some(CameraCommand::Resize {
                width: 800,
                height: 600
            })
        );
    }

    #[test]
    fn pointer_is_flipped_to_y_up() {
        let mut input = sized(800, 600);
        let _ = input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 50.0 });
        assert_eq!(
            press(&mut input, MouseButton::Left),
            Some(CameraCommand::BeginRotate(Vec2::new(100.0, 550.0)))
        );
    }

    #[test]
    fn buttons_select_gestures() {
        let mut input = sized(100, 100);
        let origin = Vec2::new(0.0, 100.0);
        assert_eq!(
            press(&mut input, MouseButton::Middle),
            Some(CameraCommand::BeginDolly(origin))
        );
        assert_eq!(
            press(&mut input, MouseButton::Right),
            Some(CameraCommand::BeginPan(origin))
        );

        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: true });
        assert_eq!(
            press(&mut input, MouseButton::Left),
            Some(CameraCommand::BeginPan(origin))
        );
    }

    #[test]
    fn drag_only_while_held() {
        let mut input = sized(200, 200);
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );

        let _ = press(&mut input, MouseButton::Left);
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 20.0, y: 30.0 }),
            Some(CameraCommand::Drag(Vec2::new(20.0, 170.0)))
        );

        // Releasing a different button does not end the drag.
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        });
        assert_eq!(input.held_button(), Some(MouseButton::Left));

        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 25.0, y: 30.0 }),
            None
        );
    }

    #[test]
    fn key_presses_map_to_commands() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("KeyI"), Some(CameraCommand::Reset));
        assert_eq!(
            input.handle_key_press("KeyP"),
            Some(CameraCommand::ToggleProjection)
        );
        assert_eq!(
            input.handle_key_press("Equal"),
            Some(CameraCommand::AdjustFovy { delta: FOVY_STEP })
        );
        assert_eq!(
            input.handle_key_press("Minus"),
            Some(CameraCommand::AdjustFovy { delta: -FOVY_STEP })
        );
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn custom_bindings_are_used() {
        let mut bindings = KeybindingOptions::default();
        let _ = bindings
            .bindings
            .insert(KeyAction::ResetCamera, "Space".to_owned());
        bindings.rebuild_reverse_map();

        let input = InputProcessor::with_key_bindings(bindings);
        assert_eq!(input.handle_key_press("Space"), Some(CameraCommand::Reset));
        assert_eq!(input.handle_key_press("KeyI"), None);
    }
}
