use std::ops::RangeInclusive;

pub const FIRST_GLYPH: char = ' ';
pub const LAST_GLYPH: char = '\u{7f}';
pub const GLYPH_COUNT: usize = 96;
pub const PLACEHOLDER_GLYPH: char = '?';

#[must_use]
pub fn glyph_range() -> RangeInclusive<char> {
    FIRST_GLYPH..=LAST_GLYPH
}

/// Placement of a glyph bitmap relative to the pen, in whole pixels at the
/// atlas pixel height. `bearing_y` is the distance from the baseline up to
/// the top row of the bitmap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub width: u32,
    pub height: u32,
    pub bearing_x: i32,
    pub bearing_y: i32,
    pub advance: u32,
}

#[derive(Debug)]
pub struct GlyphEntry<H> {
    pub texture: H,
    pub metrics: GlyphMetrics,
}

/// One entry per character in `' '..='\u{7f}'`, each owning its texture.
///
/// Dropping the atlas drops every handle, which is what releases the GPU
/// textures.
#[derive(Debug)]
pub struct GlyphAtlas<H> {
    entries: [GlyphEntry<H>; GLYPH_COUNT],
    pixel_height: f32,
}

impl<H> GlyphAtlas<H> {
    pub(crate) fn new(entries: [GlyphEntry<H>; GLYPH_COUNT], pixel_height: f32) -> Self {
        Self {
            entries,
            pixel_height,
        }
    }

    #[must_use]
    pub fn index_of(character: char) -> Option<usize> {
        glyph_range()
            .contains(&character)
            .then(|| character as usize - FIRST_GLYPH as usize)
    }

    #[must_use]
    pub fn get(&self, character: char) -> Option<&GlyphEntry<H>> {
        Self::index_of(character).map(|index| &self.entries[index])
    }

    /// The entry for `character`, or the placeholder glyph when the
    /// character is not covered.
    #[must_use]
    pub fn get_or_placeholder(&self, character: char) -> (char, &GlyphEntry<H>) {
        match Self::index_of(character) {
            Some(index) => (character, &self.entries[index]),
            None => (
                PLACEHOLDER_GLYPH,
                &self.entries[PLACEHOLDER_GLYPH as usize - FIRST_GLYPH as usize],
            ),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn pixel_height(&self) -> f32 {
        self.pixel_height
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &GlyphEntry<H>)> {
        glyph_range().zip(self.entries.iter())
    }
}
