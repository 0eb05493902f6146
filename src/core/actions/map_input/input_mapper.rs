use crate::core::data::host_event::{HostEvent, Key, MouseButton, ScrollAxis};
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;
use crate::core::util::screen_to_plane_coords::{screen_delta_to_plane, screen_to_ndc};
use crate::core::view::drag::DragState;
use crate::core::view::view_state::ViewState;
use tracing::{debug, trace};

pub const ZOOM_IN_FACTOR: f64 = 0.85;
pub const ZOOM_OUT_FACTOR: f64 = 1.176;

/// What the host loop should do after an event has been applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    Continue,
    Quit,
}

/// Turns host events into [`ViewState`] mutations.
///
/// The mapper holds no state of its own: the drag gesture lives in the view
/// state, and the viewport is passed in with every event so resizes are
/// picked up without notifying the mapper.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InputMapper {
    zoom_in_factor: f64,
    zoom_out_factor: f64,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self {
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

impl InputMapper {
    #[must_use]
    pub fn new(zoom_in_factor: f64, zoom_out_factor: f64) -> Self {
        Self {
            zoom_in_factor,
            zoom_out_factor,
        }
    }

    pub fn handle(&self, state: &mut ViewState, viewport: Viewport, event: &HostEvent) -> MapOutcome {
        match *event {
            HostEvent::Closed => return MapOutcome::Quit,
            HostEvent::Resized { .. } => {}
            HostEvent::KeyPressed(key) => return self.handle_key(state, key),
            HostEvent::MouseButtonPressed {
                button: MouseButton::Left,
                position,
            } => state.set_drag(DragState::Dragging { last: position }),
            HostEvent::MouseButtonReleased {
                button: MouseButton::Left,
                ..
            } => state.set_drag(DragState::Idle),
            HostEvent::MouseButtonPressed { .. } | HostEvent::MouseButtonReleased { .. } => {}
            HostEvent::MouseMoved { position } => self.drag_to(state, viewport, position),
            HostEvent::MouseWheelScrolled {
                delta,
                axis: ScrollAxis::Vertical,
                position,
            } => self.scroll_at(state, viewport, delta, position),
            HostEvent::MouseWheelScrolled { .. } => {}
        }

        MapOutcome::Continue
    }

    fn handle_key(&self, state: &mut ViewState, key: Key) -> MapOutcome {
        match key {
            Key::Escape => return MapOutcome::Quit,
            Key::R => {
                state.reset();
                debug!("view reset");
            }
            Key::C => state.cycle_color(1),
            Key::V => state.cycle_color(-1),
            Key::B => state.cycle_background_color(1),
            Key::N => state.cycle_background_color(-1),
            Key::Plus => state.increase_max_iterations(),
            Key::Minus => state.decrease_max_iterations(),
            Key::A => state.toggle_adaptive_iterations(),
            Key::Other => {}
        }

        MapOutcome::Continue
    }

    fn drag_to(&self, state: &mut ViewState, viewport: Viewport, position: ScreenPoint) {
        let DragState::Dragging { last } = state.drag() else {
            return;
        };

        let Ok(delta) = screen_delta_to_plane(
            position.x - last.x,
            position.y - last.y,
            viewport,
            state.zoom(),
        ) else {
            return;
        };

        state.pan_by(delta);
        state.set_drag(DragState::Dragging { last: position });
    }

    fn scroll_at(&self, state: &mut ViewState, viewport: Viewport, delta: f32, position: ScreenPoint) {
        let factor = if delta > 0.0 {
            self.zoom_in_factor
        } else if delta < 0.0 {
            self.zoom_out_factor
        } else {
            return;
        };

        let Ok(anchor) = screen_to_ndc(position, viewport) else {
            return;
        };

        if !state.zoom_about(anchor, factor) {
            trace!(zoom = state.zoom(), factor, "zoom limit reached");
        }
    }
}
