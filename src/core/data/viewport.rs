/// Size of the drawable surface in physical pixels.
///
/// A zero width or height is allowed: it is what the host reports while the
/// window is minimised. Coordinate mapping refuses to work on such a
/// viewport, see [`Viewport::is_degenerate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height. Only meaningful when the viewport is not degenerate.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let viewport = Viewport::new(1200, 800);

        assert_eq!(viewport.width(), 1200);
        assert_eq!(viewport.height(), 800);
        assert_eq!(viewport.resolution(), [1200.0, 800.0]);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Viewport::new(1200, 800).aspect_ratio(), 1.5);
        assert_eq!(Viewport::new(1000, 1000).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_zero_sized_viewport_is_degenerate() {
        assert!(Viewport::new(0, 800).is_degenerate());
        assert!(Viewport::new(1200, 0).is_degenerate());
        assert!(Viewport::default().is_degenerate());
        assert!(!Viewport::new(1, 1).is_degenerate());
    }
}
