use crate::core::actions::build_glyph_atlas::ports::glyph_rasterizer::GlyphBitmap;

/// A single-channel texture owned by the glyph atlas. Implementations free
/// the underlying resource when dropped.
pub trait GlyphTexture {
    fn size(&self) -> (u32, u32);
}

/// Uploads glyph bitmaps. Called on the thread that owns the rendering
/// backend, once per glyph, in character order.
pub trait GlyphTextureFactory {
    type Handle: GlyphTexture;

    fn create(&mut self, character: char, bitmap: &GlyphBitmap) -> Self::Handle;
}
