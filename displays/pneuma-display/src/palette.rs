//! Colours

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Warm night-light orange, easy on dark-adapted eyes
pub const NIGHTLIGHT: Rgb565 = Rgb565::new(31, 25, 3);

/// Foreground and background colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Shapes and text
    pub foreground: Rgb565,
    /// Everything else
    pub background: Rgb565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: NIGHTLIGHT,
            background: Rgb565::BLACK,
        }
    }
}
