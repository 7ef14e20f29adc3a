//! RGBA colors and the fixed paddle palette.

/// Plain RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
pub const GRAY: Color = Color::rgb(130, 130, 130);
pub const SKYBLUE: Color = Color::rgb(102, 191, 255);
pub const LIME: Color = Color::rgb(0, 158, 47);
pub const GOLD: Color = Color::rgb(255, 203, 0);
pub const PINK: Color = Color::rgb(255, 109, 194);
pub const ORANGE: Color = Color::rgb(255, 161, 0);

/// Selectable paddle colors, in cycling order
pub const PADDLE_PALETTE: [Color; 6] = [WHITE, SKYBLUE, LIME, GOLD, PINK, ORANGE];

/// Bounds-checked cyclic index into the paddle palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteIndex(usize);

impl PaletteIndex {
    pub fn new(index: usize) -> Self {
        Self(index % PADDLE_PALETTE.len())
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn color(self) -> Color {
        PADDLE_PALETTE[self.0]
    }

    /// Cycle backward, wrapping from 0 to the last entry
    pub fn prev(self) -> Self {
        Self(if self.0 == 0 {
            PADDLE_PALETTE.len() - 1
        } else {
            self.0 - 1
        })
    }

    /// Cycle forward, wrapping from the last entry back to 0
    pub fn next(self) -> Self {
        Self((self.0 + 1) % PADDLE_PALETTE.len())
    }
}
