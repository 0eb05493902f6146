use crate::core::view::palette::Rgb;

/// A line of overlay text, positioned by its baseline origin in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub color: Rgb,
}
