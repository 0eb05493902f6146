pub mod build_glyph_atlas;
pub mod layout_text;
pub mod map_input;
