use crate::core::data::screen_point::ScreenPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// Keys the viewer reacts to. Everything else arrives as `Other`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    R,
    C,
    V,
    B,
    N,
    A,
    Plus,
    Minus,
    Escape,
    Other,
}

/// Input delivered by the host window, already stripped of any toolkit types.
///
/// Button and wheel events carry the cursor position at the time of the
/// event; hosts that don't report it track the last `MouseMoved` position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HostEvent {
    Closed,
    Resized {
        width: u32,
        height: u32,
    },
    KeyPressed(Key),
    MouseButtonPressed {
        button: MouseButton,
        position: ScreenPoint,
    },
    MouseButtonReleased {
        button: MouseButton,
        position: ScreenPoint,
    },
    MouseMoved {
        position: ScreenPoint,
    },
    MouseWheelScrolled {
        delta: f32,
        axis: ScrollAxis,
        position: ScreenPoint,
    },
}
