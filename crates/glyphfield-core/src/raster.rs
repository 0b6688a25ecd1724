use crate::error::Result;
use crate::field::library::Pattern;
use crate::field::params::PatternParams;
use crate::palette::Palette;
use crate::pointer::{perturb, PointerState};
use crate::quantize::to_glyph;
use crate::validate::validate_params;

/// Frame counter to field-time conversion factor.
pub const TIME_SCALE: f64 = 0.05;

/// One rendered frame: `height` rows of exactly `width` glyphs, rows joined
/// by `\n`. Immutable once produced; the next frame supersedes it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedGrid {
    text: String,
    width: u32,
    height: u32,
}

impl RenderedGrid {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows without their terminators.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for RenderedGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render one frame at the default time scale: `t = frame * TIME_SCALE`.
///
/// Hosts with a rescaled clock pass [`AnimationClock::time`] to
/// [`render_at`] instead.
///
/// [`AnimationClock::time`]: crate::clock::AnimationClock::time
pub fn render(
    pattern: Pattern,
    frame: u64,
    params: &PatternParams,
    palette: &Palette,
    pointer: Option<PointerState>,
) -> Result<RenderedGrid> {
    render_at(pattern, frame as f64 * TIME_SCALE, params, palette, pointer)
}

/// Render one frame at an explicit field time.
///
/// Pure: identical inputs produce byte-identical output, so this is safe to
/// call speculatively (export, tests) alongside an animation loop. Row-major
/// iteration, y outer / x inner; per cell: field eval, optional pointer
/// perturbation, quantize, palette lookup.
pub fn render_at(
    pattern: Pattern,
    t: f64,
    params: &PatternParams,
    palette: &Palette,
    pointer: Option<PointerState>,
) -> Result<RenderedGrid> {
    validate_params(params)?;

    // Rows are width glyphs + newline; presets are at most 3 bytes/glyph.
    let mut text =
        String::with_capacity((params.width as usize * 3 + 1) * params.height as usize);

    for y in 0..params.height {
        for x in 0..params.width {
            let (xf, yf) = (x as f64, y as f64);
            let mut value = pattern.eval(xf, yf, t, params);

            if let Some(ptr) = pointer {
                value = perturb(value, xf, yf, ptr, t);
            }

            text.push_str(to_glyph(value, params.density, palette));
        }
        text.push('\n');
    }

    Ok(RenderedGrid {
        text,
        width: params.width,
        height: params.height,
    })
}
