use crate::core::data::viewport::Viewport;
use crate::core::view::view_state::ViewState;
use bytemuck::{Pod, Zeroable};

/// Per-frame parameters for the fractal shader, laid out to match the WGSL
/// uniform block (64 bytes, vec3 fields on 16-byte boundaries).
///
/// Zoom and offset are split into a high and a low `f32` so that the shader
/// can rebuild most of the `f64` precision when emulated doubles are on.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FractalUniforms {
    pub resolution: [f32; 2],
    pub offset: [f32; 2],
    pub offset_lo: [f32; 2],
    pub zoom: f32,
    pub zoom_lo: f32,
    pub color: [f32; 3],
    pub max_iterations: i32,
    pub color_bg: [f32; 3],
    pub adaptive_iterations: u32,
}

impl FractalUniforms {
    #[must_use]
    pub fn from_view(state: &ViewState, viewport: Viewport, iterations: u32) -> Self {
        let (zoom, zoom_lo) = split_f64(state.zoom());
        let (offset_x, offset_x_lo) = split_f64(state.offset().real);
        let (offset_y, offset_y_lo) = split_f64(state.offset().imag);

        Self {
            resolution: viewport.resolution(),
            offset: [offset_x, offset_y],
            offset_lo: [offset_x_lo, offset_y_lo],
            zoom,
            zoom_lo,
            color: state.color_index().foreground(),
            max_iterations: iterations.min(i32::MAX as u32) as i32,
            color_bg: state.background_color_index().background(),
            adaptive_iterations: u32::from(state.adaptive_iterations()),
        }
    }
}

/// `hi + lo` reproduces `value` to roughly 48 bits of mantissa.
fn split_f64(value: f64) -> (f32, f32) {
    let hi = value as f32;
    let lo = (value - f64::from(hi)) as f32;
    (hi, lo)
}
