use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlyphError>;

#[derive(Debug, Error)]
pub enum GlyphError {
    /// Pattern name not present in the library. The caller decides the
    /// fallback policy; we never substitute a default silently.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Palettes must hold at least one grapheme. Rejected at configuration
    /// time, never discovered mid-raster.
    #[error("palette must contain at least one character")]
    EmptyPalette,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
