use crate::core::actions::build_glyph_atlas::errors::GlyphAtlasError;
use crate::core::actions::build_glyph_atlas::ports::glyph_rasterizer::{
    GlyphBitmap, GlyphRasterizer, RasterizedGlyph,
};
use crate::core::data::glyph_atlas::GlyphMetrics;
use fontdue::{Font, FontSettings};

/// Rasterizes glyphs with `fontdue` so that the tallest ascender to the
/// deepest descender spans `pixel_height` pixels.
pub struct FontdueRasterizer {
    font: Font,
    font_size: f32,
}

impl FontdueRasterizer {
    pub fn from_bytes(font_bytes: &[u8], pixel_height: f32) -> Result<Self, GlyphAtlasError> {
        if !pixel_height.is_finite() || pixel_height <= 0.0 {
            return Err(GlyphAtlasError::InvalidPixelHeight(pixel_height));
        }

        let font = Font::from_bytes(font_bytes, FontSettings::default())
            .map_err(|message| GlyphAtlasError::FontLoad(message.to_string()))?;

        // fontdue sizes by em; convert the requested line height into one
        let font_size = match font.horizontal_line_metrics(1.0) {
            Some(line) if line.ascent - line.descent > 0.0 => {
                pixel_height / (line.ascent - line.descent)
            }
            _ => pixel_height,
        };

        Ok(Self { font, font_size })
    }

    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn rasterize(&self, character: char) -> RasterizedGlyph {
        let (metrics, coverage) = self.font.rasterize(character, self.font_size);

        let width = metrics.width as u32;
        let height = metrics.height as u32;

        RasterizedGlyph {
            bitmap: GlyphBitmap {
                width,
                height,
                coverage,
            },
            metrics: GlyphMetrics {
                width,
                height,
                bearing_x: metrics.xmin,
                bearing_y: metrics.ymin + height as i32,
                advance: metrics.advance_width.max(0.0) as u32,
            },
        }
    }
}
