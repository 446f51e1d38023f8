//! 16-entry ANSI color palette.
//!
//! Layout: entries 0–7 are the normal-intensity colors, 8–15 the bright
//! variants selected by the bold flag. Values follow the xterm defaults.
//! The table is built once from `const` data and never mutated.

use super::{NamedColor, Rgb};

/// Total palette entries: 8 names × 2 intensities.
pub const NUM_COLORS: usize = 16;

/// Default foreground, also the reset target for `ResetAttrs`.
pub const DEFAULT_FG: Rgb = Rgb { r: 0xff, g: 0xff, b: 0xff };

/// Normal-intensity colors (indices 0–7).
const NORMAL_COLORS: [Rgb; 8] = [
    Rgb { r: 0x00, g: 0x00, b: 0x00 }, // Black
    Rgb { r: 0xcd, g: 0x00, b: 0x00 }, // Red
    Rgb { r: 0x00, g: 0xcd, b: 0x00 }, // Green
    Rgb { r: 0xcd, g: 0xcd, b: 0x00 }, // Yellow
    Rgb { r: 0x00, g: 0x00, b: 0xee }, // Blue
    Rgb { r: 0xcd, g: 0x00, b: 0xcd }, // Magenta
    Rgb { r: 0x00, g: 0xcd, b: 0xcd }, // Cyan
    Rgb { r: 0xe5, g: 0xe5, b: 0xe5 }, // White
];

/// Bright variants (indices 8–15), selected when bold is set.
const BRIGHT_COLORS: [Rgb; 8] = [
    Rgb { r: 0x7f, g: 0x7f, b: 0x7f }, // Bright Black
    Rgb { r: 0xff, g: 0x00, b: 0x00 }, // Bright Red
    Rgb { r: 0x00, g: 0xff, b: 0x00 }, // Bright Green
    Rgb { r: 0xff, g: 0xff, b: 0x00 }, // Bright Yellow
    Rgb { r: 0x5c, g: 0x5c, b: 0xff }, // Bright Blue
    Rgb { r: 0xff, g: 0x00, b: 0xff }, // Bright Magenta
    Rgb { r: 0x00, g: 0xff, b: 0xff }, // Bright Cyan
    Rgb { r: 0xff, g: 0xff, b: 0xff }, // Bright White
];

/// Immutable 16-entry color table keyed by `(NamedColor, bold)`.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [Rgb; NUM_COLORS],
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = [Rgb::default(); NUM_COLORS];
        colors[..8].copy_from_slice(&NORMAL_COLORS);
        colors[8..].copy_from_slice(&BRIGHT_COLORS);
        Self { colors }
    }
}

impl Palette {
    /// Resolve a color name to its concrete value; bold selects the
    /// bright variant.
    pub fn resolve(&self, name: NamedColor, bold: bool) -> Rgb {
        let offset = if bold { 8 } else { 0 };
        self.colors[name as usize + offset]
    }
}
