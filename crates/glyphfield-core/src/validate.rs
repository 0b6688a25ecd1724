use crate::error::{GlyphError, Result};
use crate::field::params::PatternParams;

pub fn validate_params(p: &PatternParams) -> Result<()> {
    // Grid must be non-degenerate; every row/cell loop assumes this.
    if p.width == 0 {
        return Err(GlyphError::Validation("width must be > 0".into()));
    }
    if p.height == 0 {
        return Err(GlyphError::Validation("height must be > 0".into()));
    }

    // density is a divisor exponent (1/density); zero or negative blows up
    // the remap, and an infinite density collapses it to n^0 == 1 for every
    // cell.
    if !(p.density > 0.0) || !p.density.is_finite() {
        return Err(GlyphError::Validation(
            "density must be finite and > 0".into(),
        ));
    }

    if !p.scale.is_finite() {
        return Err(GlyphError::Validation("scale must be finite".into()));
    }
    if !p.speed.is_finite() {
        return Err(GlyphError::Validation("speed must be finite".into()));
    }

    Ok(())
}
