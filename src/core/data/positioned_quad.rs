/// Texture coordinates for the top-left, bottom-left, bottom-right and
/// top-right corners. Every glyph fills its own texture.
pub const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

/// One glyph placed in screen pixels, y growing downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionedQuad {
    /// The character actually drawn, after placeholder substitution.
    pub glyph: char,
    /// Pen position when this glyph was placed.
    pub pen_x: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PositionedQuad {
    /// Corners as `[x, y, u, v]`, in the same order as [`QUAD_TEX_COORDS`].
    #[must_use]
    pub fn corners(&self) -> [[f32; 4]; 4] {
        let left = self.x;
        let top = self.y;
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        let [tl, bl, br, tr] = QUAD_TEX_COORDS;

        [
            [left, top, tl[0], tl[1]],
            [left, bottom, bl[0], bl[1]],
            [right, bottom, br[0], br[1]],
            [right, top, tr[0], tr[1]],
        ]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_follow_texture_coordinate_order() {
        let quad = PositionedQuad {
            glyph: 'A',
            pen_x: 10.0,
            x: 11.0,
            y: 20.0,
            width: 8.0,
            height: 12.0,
        };

        assert_eq!(
            quad.corners(),
            [
                [11.0, 20.0, 0.0, 0.0],
                [11.0, 32.0, 0.0, 1.0],
                [19.0, 32.0, 1.0, 1.0],
                [19.0, 20.0, 1.0, 0.0],
            ]
        );
        assert!(!quad.is_empty());
    }
}
