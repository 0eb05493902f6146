pub mod glyph_rasterizer;
pub mod glyph_texture;
