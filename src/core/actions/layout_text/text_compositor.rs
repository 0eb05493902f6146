use crate::core::data::glyph_atlas::GlyphAtlas;
use crate::core::data::positioned_quad::PositionedQuad;
use std::str::Chars;

/// Places strings on screen using the metrics recorded in a glyph atlas.
///
/// No shaping: every character advances the pen by its own advance width.
pub struct TextCompositor<'a, H> {
    atlas: &'a GlyphAtlas<H>,
}

impl<'a, H> TextCompositor<'a, H> {
    #[must_use]
    pub fn new(atlas: &'a GlyphAtlas<H>) -> Self {
        Self { atlas }
    }

    /// Lays `text` out left to right with the baseline at `origin_y`.
    ///
    /// Characters the atlas does not cover are drawn as the placeholder
    /// glyph. The returned iterator is lazy and yields one quad per
    /// character, spaces included.
    pub fn layout<'t>(
        &self,
        text: &'t str,
        origin_x: f32,
        origin_y: f32,
        scale: f32,
    ) -> Layout<'a, 't, H> {
        Layout {
            atlas: self.atlas,
            chars: text.chars(),
            pen_x: origin_x,
            baseline: origin_y,
            scale,
        }
    }
}

pub struct Layout<'a, 't, H> {
    atlas: &'a GlyphAtlas<H>,
    chars: Chars<'t>,
    pen_x: f32,
    baseline: f32,
    scale: f32,
}

impl<H> Iterator for Layout<'_, '_, H> {
    type Item = PositionedQuad;

    fn next(&mut self) -> Option<PositionedQuad> {
        let character = self.chars.next()?;
        let (glyph, entry) = self.atlas.get_or_placeholder(character);
        let metrics = entry.metrics;

        let quad = PositionedQuad {
            glyph,
            pen_x: self.pen_x,
            x: self.pen_x + metrics.bearing_x as f32 * self.scale,
            y: self.baseline - metrics.bearing_y as f32 * self.scale,
            width: metrics.width as f32 * self.scale,
            height: metrics.height as f32 * self.scale,
        };

        self.pen_x += metrics.advance as f32 * self.scale;

        Some(quad)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::glyph_atlas::{GlyphEntry, GlyphMetrics, glyph_range};

    /// Every glyph 8x12 with a 1px left bearing, sitting on the baseline,
    /// advancing by 10. The placeholder is made wider so that it can be told
    /// apart.
    fn monospace_atlas() -> GlyphAtlas<char> {
        let mut characters = glyph_range();
        let entries = std::array::from_fn(|_| {
            let character = characters.next().unwrap();
            let width = if character == '?' { 9 } else { 8 };
            GlyphEntry {
                texture: character,
                metrics: GlyphMetrics {
                    width,
                    height: 12,
                    bearing_x: 1,
                    bearing_y: 12,
                    advance: 10,
                },
            }
        });

        GlyphAtlas::new(entries, 16.0)
    }

    #[test]
    fn test_pen_advances_by_glyph_advance() {
        let atlas = monospace_atlas();
        let compositor = TextCompositor::new(&atlas);

        let pens: Vec<f32> = compositor.layout("FPS", 0.0, 0.0, 1.0).map(|q| q.pen_x).collect();

        assert_eq!(pens, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_quad_uses_bearing_and_size() {
        let atlas = monospace_atlas();
        let compositor = TextCompositor::new(&atlas);

        let quads: Vec<PositionedQuad> = compositor.layout("AB", 10.0, 30.0, 2.0).collect();

        assert_eq!(
            quads[0],
            PositionedQuad {
                glyph: 'A',
                pen_x: 10.0,
                x: 12.0,
                y: 6.0,
                width: 16.0,
                height: 24.0,
            }
        );
        assert_eq!(quads[1].pen_x, 30.0);
        assert_eq!(quads[1].x, 32.0);
    }

    #[test]
    fn test_uncovered_characters_become_placeholder() {
        let atlas = monospace_atlas();
        let compositor = TextCompositor::new(&atlas);

        let quads: Vec<PositionedQuad> = compositor.layout("a€b", 0.0, 0.0, 1.0).collect();

        assert_eq!(quads.len(), 3);
        assert_eq!(quads[1].glyph, '?');
        assert_eq!(quads[1].width, 9.0);
        assert_eq!(quads[2].pen_x, 20.0);
    }

    #[test]
    fn test_question_mark_is_drawn_as_itself() {
        let atlas = monospace_atlas();
        let compositor = TextCompositor::new(&atlas);

        let quad = compositor.layout("?", 0.0, 0.0, 1.0).next().unwrap();

        assert_eq!(quad.glyph, '?');
    }

    #[test]
    fn test_empty_string_yields_nothing() {
        let atlas = monospace_atlas();
        let compositor = TextCompositor::new(&atlas);

        assert_eq!(compositor.layout("", 5.0, 5.0, 1.0).count(), 0);
    }

    #[test]
    fn test_layout_is_recomputed_per_call() {
        let atlas = monospace_atlas();
        let compositor = TextCompositor::new(&atlas);

        let first: Vec<PositionedQuad> = compositor.layout("FPS: 60", 10.0, 30.0, 1.0).collect();
        let second: Vec<PositionedQuad> = compositor.layout("FPS: 60", 10.0, 30.0, 1.0).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }
}
