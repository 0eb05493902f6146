use crate::controllers::interactive::data::overlay_line::OverlayLine;
use crate::core::data::fractal_uniforms::FractalUniforms;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub uniforms: FractalUniforms,
    pub overlay: Vec<OverlayLine>,
}
