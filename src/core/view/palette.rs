pub type Rgb = [f32; 3];

pub const PALETTE_SIZE: usize = 7;

pub const FOREGROUND_COLORS: [Rgb; PALETTE_SIZE] = [
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
];

pub const BACKGROUND_COLORS: [Rgb; PALETTE_SIZE] = [
    [0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
    [0.0, 0.5, 0.0],
    [0.0, 0.0, 0.5],
    [0.5, 0.5, 0.0],
    [0.5, 0.0, 0.5],
    [0.0, 0.5, 0.5],
];

/// Position in a palette. Always in `0..PALETTE_SIZE`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PaletteIndex(usize);

impl PaletteIndex {
    /// Wraps any integer, negative ones included, into the palette range.
    #[must_use]
    pub fn wrapping(index: i64) -> Self {
        Self(index.rem_euclid(PALETTE_SIZE as i64) as usize)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn step(self, delta: i64) -> Self {
        Self::wrapping(self.0 as i64 + delta)
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.step(1)
    }

    #[must_use]
    pub fn previous(self) -> Self {
        self.step(-1)
    }

    #[must_use]
    pub fn foreground(self) -> Rgb {
        FOREGROUND_COLORS[self.0]
    }

    #[must_use]
    pub fn background(self) -> Rgb {
        BACKGROUND_COLORS[self.0]
    }
}
