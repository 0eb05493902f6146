pub mod errors;
pub mod fontdue_rasterizer;
pub mod glyph_atlas_builder;
pub mod ports;
