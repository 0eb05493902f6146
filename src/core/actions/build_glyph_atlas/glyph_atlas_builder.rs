use crate::core::actions::build_glyph_atlas::errors::GlyphAtlasError;
use crate::core::actions::build_glyph_atlas::fontdue_rasterizer::FontdueRasterizer;
use crate::core::actions::build_glyph_atlas::ports::glyph_rasterizer::{
    GlyphRasterizer, RasterizedGlyph,
};
use crate::core::actions::build_glyph_atlas::ports::glyph_texture::GlyphTextureFactory;
use crate::core::data::glyph_atlas::{GLYPH_COUNT, GlyphAtlas, GlyphEntry, glyph_range};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_PIXEL_HEIGHT: f32 = 24.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphAtlasBuilder {
    pixel_height: f32,
}

impl Default for GlyphAtlasBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PIXEL_HEIGHT)
    }
}

impl GlyphAtlasBuilder {
    #[must_use]
    pub fn new(pixel_height: f32) -> Self {
        Self { pixel_height }
    }

    pub fn build_from_file<F: GlyphTextureFactory>(
        &self,
        path: &Path,
        factory: &mut F,
    ) -> Result<GlyphAtlas<F::Handle>, GlyphAtlasError> {
        let font_bytes = fs::read(path).map_err(|source| GlyphAtlasError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = font_bytes.len(), "font loaded");

        self.build(&font_bytes, factory)
    }

    pub fn build<F: GlyphTextureFactory>(
        &self,
        font_bytes: &[u8],
        factory: &mut F,
    ) -> Result<GlyphAtlas<F::Handle>, GlyphAtlasError> {
        let rasterizer = FontdueRasterizer::from_bytes(font_bytes, self.pixel_height)?;

        Ok(self.build_with(&rasterizer, factory))
    }

    /// Rasterizes the whole character range in parallel, then uploads the
    /// bitmaps one by one on the calling thread.
    pub fn build_with<R: GlyphRasterizer, F: GlyphTextureFactory>(
        &self,
        rasterizer: &R,
        factory: &mut F,
    ) -> GlyphAtlas<F::Handle> {
        let characters: Vec<char> = glyph_range().collect();

        let rasterized: Vec<RasterizedGlyph> = characters
            .par_iter()
            .map(|character| rasterizer.rasterize(*character))
            .collect();

        let entries: [GlyphEntry<F::Handle>; GLYPH_COUNT] = std::array::from_fn(|index| {
            let glyph = &rasterized[index];

            GlyphEntry {
                texture: factory.create(characters[index], &glyph.bitmap),
                metrics: glyph.metrics,
            }
        });

        info!(
            glyphs = GLYPH_COUNT,
            pixel_height = self.pixel_height,
            "glyph atlas built"
        );

        GlyphAtlas::new(entries, self.pixel_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::build_glyph_atlas::ports::glyph_rasterizer::GlyphBitmap;
    use crate::core::actions::build_glyph_atlas::ports::glyph_texture::GlyphTexture;
    use crate::core::data::glyph_atlas::GlyphMetrics;
    use std::cell::Cell;
    use std::rc::Rc;

    const FONT: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/fonts/DejaVuSansMono.ttf"
    ));

    struct MockTexture {
        character: char,
        size: (u32, u32),
        released: Rc<Cell<usize>>,
    }

    impl GlyphTexture for MockTexture {
        fn size(&self) -> (u32, u32) {
            self.size
        }
    }

    impl Drop for MockTexture {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    #[derive(Default)]
    struct MockTextureFactory {
        uploads: Vec<char>,
        released: Rc<Cell<usize>>,
    }

    impl GlyphTextureFactory for MockTextureFactory {
        type Handle = MockTexture;

        fn create(&mut self, character: char, bitmap: &GlyphBitmap) -> MockTexture {
            self.uploads.push(character);

            MockTexture {
                character,
                size: (bitmap.width.max(1), bitmap.height.max(1)),
                released: Rc::clone(&self.released),
            }
        }
    }

    struct BoxRasterizer;

    impl GlyphRasterizer for BoxRasterizer {
        fn rasterize(&self, character: char) -> RasterizedGlyph {
            let width = (character as u32 % 5) + 1;

            RasterizedGlyph {
                bitmap: GlyphBitmap {
                    width,
                    height: 2,
                    coverage: vec![255; (width * 2) as usize],
                },
                metrics: GlyphMetrics {
                    width,
                    height: 2,
                    bearing_x: 0,
                    bearing_y: 2,
                    advance: width + 1,
                },
            }
        }
    }

    #[test]
    fn test_atlas_from_real_font_has_all_entries() {
        let mut factory = MockTextureFactory::default();

        let atlas = GlyphAtlasBuilder::default().build(FONT, &mut factory).unwrap();

        assert_eq!(atlas.len(), 96);
        assert_eq!(factory.uploads.len(), 96);
        assert_eq!(atlas.pixel_height(), 24.0);
        for (character, entry) in atlas.iter() {
            let metrics = entry.metrics;
            assert!(metrics.width < 64 && metrics.height < 64, "{:?}", metrics);
            if character.is_ascii_graphic() || character == ' ' {
                assert!(metrics.advance > 0, "{:?} {:?}", character, metrics);
            }
        }
    }

    #[test]
    fn test_glyphs_fit_requested_pixel_height() {
        let mut factory = MockTextureFactory::default();

        let atlas = GlyphAtlasBuilder::new(32.0).build(FONT, &mut factory).unwrap();

        let tallest = atlas.iter().map(|(_, entry)| entry.metrics.height).max().unwrap();
        assert!(tallest > 16 && tallest <= 34, "tallest={}", tallest);
    }

    #[test]
    fn test_uploads_happen_in_character_order() {
        let mut factory = MockTextureFactory::default();

        let atlas = GlyphAtlasBuilder::default().build_with(&BoxRasterizer, &mut factory);

        assert_eq!(factory.uploads, glyph_range().collect::<Vec<_>>());
        for (character, entry) in atlas.iter() {
            assert_eq!(entry.texture.character, character);
            assert_eq!(entry.texture.size(), (entry.metrics.width, 2));
        }
    }

    #[test]
    fn test_dropping_atlas_releases_every_texture() {
        let mut factory = MockTextureFactory::default();
        let released = Rc::clone(&factory.released);

        let atlas = GlyphAtlasBuilder::default().build_with(&BoxRasterizer, &mut factory);
        assert_eq!(released.get(), 0);

        drop(atlas);

        assert_eq!(released.get(), 96);
    }

    #[test]
    fn test_garbage_font_is_a_load_error() {
        let mut factory = MockTextureFactory::default();

        let result = GlyphAtlasBuilder::default().build(b"not a font at all", &mut factory);

        assert!(matches!(result, Err(GlyphAtlasError::FontLoad(_))));
        assert!(factory.uploads.is_empty());
    }

    #[test]
    fn test_missing_font_file_is_an_io_error() {
        let mut factory = MockTextureFactory::default();
        let path = Path::new("/nonexistent/fonts/missing.ttf");

        let result = GlyphAtlasBuilder::default().build_from_file(path, &mut factory);

        match result {
            Err(GlyphAtlasError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {:?}", other.map(|atlas| atlas.len())),
        }
    }
}
