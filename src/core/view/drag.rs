use crate::core::data::screen_point::ScreenPoint;

/// Pan gesture state. The anchor only exists while a drag is in progress.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: ScreenPoint,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
