//! Converts raw platform events into pointer gestures.
//!
//! The `InputProcessor` owns the transient input state (cursor position and
//! primary-button state). It is the only thing that sits between raw window
//! events and [`PanoController::handle_pointer`](crate::PanoController::handle_pointer).

use glam::DVec2;

use super::event::{InputEvent, MouseButton, PointerEvent};

/// Converts raw window events into [`PointerEvent`]s.
///
/// Only the left button drives gestures. Leaving the window while pressed
/// releases the gesture at the last known position.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(pointer) = input_processor.handle_event(event) {
///     controller.handle_pointer(pointer);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    cursor: DVec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
}

impl InputProcessor {
    /// Create a processor with the button up and the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Forget the pressed button without producing a release.
    ///
    /// For hosts that hand a drag over to another tool mid-gesture.
    pub fn release_mouse_state(&mut self) {
        self.mouse_pressed = false;
    }

    /// Process a raw input event and return zero or one pointer events.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PointerEvent> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = DVec2::new(x, y);
                self.mouse_pressed.then_some(PointerEvent::Move(self.cursor))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::CursorLeft => self.release(),
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        if !pressed {
            return self.release();
        }
        if self.mouse_pressed {
            return None;
        }
        self.mouse_pressed = true;
        Some(PointerEvent::Down(self.cursor))
    }

    fn release(&mut self) -> Option<PointerEvent> {
        std::mem::replace(&mut self.mouse_pressed, false)
            .then_some(PointerEvent::Up(self.cursor))
    }
}
