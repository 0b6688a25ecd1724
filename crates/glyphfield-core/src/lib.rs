pub mod error;
pub mod validate;

pub mod clock;
pub mod export;
pub mod field;
pub mod palette;
pub mod pointer;
pub mod quantize;
pub mod raster;

pub use crate::clock::AnimationClock;
pub use crate::error::{GlyphError, Result};
pub use crate::field::library::Pattern;
pub use crate::field::params::PatternParams;
pub use crate::palette::{Palette, PalettePreset};
pub use crate::pointer::PointerState;
pub use crate::raster::{render, render_at, RenderedGrid, TIME_SCALE};
