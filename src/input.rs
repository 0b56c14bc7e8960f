//! Translating winit window events into editor pointer events.
//!
//! Left button maps to [`PointerButton::Primary`], right button to
//! [`PointerButton::Secondary`]. Every other button is ignored, as are
//! window events unrelated to the pointer. The last cursor position is kept
//! so a host can build its pick ray from it.

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, WindowEvent},
};

use crate::controller::{PointerButton, PointerEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTranslator {
    coords: PhysicalPosition<f64>,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in physical pixels.
    pub fn coords(&self) -> PhysicalPosition<f64> {
        self.coords
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_input(*state, *button),
            WindowEvent::CursorMoved { position, .. } => Some(self.on_cursor_moved(*position)),
            _ => None,
        }
    }

    pub fn on_mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
    ) -> Option<PointerEvent> {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            _ => return None,
        };
        Some(if state.is_pressed() {
            PointerEvent::Down(button)
        } else {
            PointerEvent::Up(button)
        })
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        self.coords = position;
        PointerEvent::Move
    }
}
