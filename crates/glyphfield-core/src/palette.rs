use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{GlyphError, Result};

/// Ordered character lookup table for the quantizer.
///
/// Entries are grapheme clusters, not code units: several presets use
/// multi-byte symbols, and a raster cell holds one visible glyph. The low
/// end of the normalized sample range maps to the first entry, the high end
/// to the last. Never empty; [`Palette::new`] enforces that at configuration
/// time so the raster loop does not have to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<String>,
}

impl Palette {
    pub fn new(chars: &str) -> Result<Self> {
        let glyphs: Vec<String> = chars.graphemes(true).map(str::to_owned).collect();
        if glyphs.is_empty() {
            return Err(GlyphError::EmptyPalette);
        }
        Ok(Self { glyphs })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at a clamped quantizer index. Panics on out-of-range input;
    /// the quantizer guarantees `index < len()`.
    #[inline]
    pub fn glyph(&self, index: usize) -> &str {
        &self.glyphs[index]
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(String::as_str)
    }
}

impl From<PalettePreset> for Palette {
    fn from(preset: PalettePreset) -> Self {
        // Preset strings are non-empty by construction.
        Palette::new(preset.chars()).expect("presets are non-empty")
    }
}

/// The named palettes shipped with the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PalettePreset {
    Blocks,
    Dots,
    Circles,
    Squares,
    Lines,
    Gradients,
    Minimal,
    Ascii,
    Braille,
    Geometric,
}

impl PalettePreset {
    pub const ALL: [PalettePreset; 10] = [
        PalettePreset::Blocks,
        PalettePreset::Dots,
        PalettePreset::Circles,
        PalettePreset::Squares,
        PalettePreset::Lines,
        PalettePreset::Gradients,
        PalettePreset::Minimal,
        PalettePreset::Ascii,
        PalettePreset::Braille,
        PalettePreset::Geometric,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PalettePreset::Blocks => "blocks",
            PalettePreset::Dots => "dots",
            PalettePreset::Circles => "circles",
            PalettePreset::Squares => "squares",
            PalettePreset::Lines => "lines",
            PalettePreset::Gradients => "gradients",
            PalettePreset::Minimal => "minimal",
            PalettePreset::Ascii => "ascii",
            PalettePreset::Braille => "braille",
            PalettePreset::Geometric => "geometric",
        }
    }

    pub fn chars(self) -> &'static str {
        match self {
            PalettePreset::Blocks => "█▓▒░·",
            PalettePreset::Dots => "●○◐◑◒◓",
            PalettePreset::Circles => "●◉○◎◌·",
            PalettePreset::Squares => "■▪▫◼◻▢",
            PalettePreset::Lines => "║│┃┆┇┊",
            PalettePreset::Gradients => "██▓▒░ ",
            PalettePreset::Minimal => "█░ ",
            PalettePreset::Ascii => "@#*+=:-.",
            PalettePreset::Braille => "⣿⣾⣽⣻⣟⣯⣷⣶",
            PalettePreset::Geometric => "▲△▼▽◆◇",
        }
    }
}

impl fmt::Display for PalettePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PalettePreset {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self> {
        PalettePreset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| GlyphError::Validation(format!("unknown palette preset: {s}")))
    }
}
