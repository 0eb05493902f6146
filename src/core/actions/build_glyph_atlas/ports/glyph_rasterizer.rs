use crate::core::data::glyph_atlas::GlyphMetrics;

/// Coverage values, one byte per pixel, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RasterizedGlyph {
    pub bitmap: GlyphBitmap,
    pub metrics: GlyphMetrics,
}

pub trait GlyphRasterizer: Sync {
    fn rasterize(&self, character: char) -> RasterizedGlyph;
}
