pub mod complex;
pub mod fractal_uniforms;
pub mod glyph_atlas;
pub mod host_event;
pub mod positioned_quad;
pub mod screen_point;
pub mod viewport;
