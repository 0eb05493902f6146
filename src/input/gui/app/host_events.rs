use crate::core::data::host_event::{HostEvent, Key, MouseButton, ScrollAxis};
use crate::core::data::screen_point::ScreenPoint;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Converts winit window events into `HostEvent`s.
///
/// winit reports the cursor position only on `CursorMoved`, so the last one
/// is remembered and attached to button and wheel events.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HostEventTranslator {
    cursor: ScreenPoint,
}

impl HostEventTranslator {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<HostEvent> {
        match event {
            WindowEvent::CloseRequested => Some(HostEvent::Closed),
            WindowEvent::Resized(size) => Some(HostEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::KeyboardInput { event, .. } => key_pressed(event),
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(self.mouse_input(*state, *button))
            }
            WindowEvent::MouseWheel { delta, .. } => self.mouse_wheel(*delta),
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> HostEvent {
        self.cursor = ScreenPoint::new(position.x as f32, position.y as f32);

        HostEvent::MouseMoved {
            position: self.cursor,
        }
    }

    pub fn mouse_input(&self, state: ElementState, button: winit::event::MouseButton) -> HostEvent {
        let button = map_button(button);

        match state {
            ElementState::Pressed => HostEvent::MouseButtonPressed {
                button,
                position: self.cursor,
            },
            ElementState::Released => HostEvent::MouseButtonReleased {
                button,
                position: self.cursor,
            },
        }
    }

    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> Option<HostEvent> {
        let (x, y) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(position) => (position.x as f32, position.y as f32),
        };

        let (delta, axis) = if y != 0.0 {
            (y, ScrollAxis::Vertical)
        } else if x != 0.0 {
            (x, ScrollAxis::Horizontal)
        } else {
            return None;
        };

        Some(HostEvent::MouseWheelScrolled {
            delta,
            axis,
            position: self.cursor,
        })
    }
}

fn key_pressed(event: &KeyEvent) -> Option<HostEvent> {
    if event.state != ElementState::Pressed {
        return None;
    }

    match event.physical_key {
        PhysicalKey::Code(code) => Some(HostEvent::KeyPressed(map_key(code))),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Whether a translated event should reach the viewer after egui has seen it.
///
/// Window-level events and button releases always get through; a release
/// swallowed by an egui panel would otherwise leave a drag running.
#[must_use]
pub fn reaches_viewer(event: &HostEvent, consumed_by_egui: bool) -> bool {
    !consumed_by_egui
        || matches!(
            event,
            HostEvent::Closed | HostEvent::Resized { .. } | HostEvent::MouseButtonReleased { .. }
        )
}

#[must_use]
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyR => Key::R,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyA => Key::A,
        KeyCode::Equal | KeyCode::NumpadAdd => Key::Plus,
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

fn map_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}
