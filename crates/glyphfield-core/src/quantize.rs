use crate::palette::Palette;

/// Deterministic scalar -> palette index mapping.
///
/// Steps, in order:
/// 1. normalize `n = (value + 1) / 2` — fields are nominally in [-1, 1],
///    but perturbation can push samples outside, so `n` may leave [0, 1];
/// 2. density remap `a = n^(1/density)`;
/// 3. index `floor(a * len)`;
/// 4. clamp into `[0, len - 1]`.
///
/// Guarantees `value == -1 -> 0` and `value == 1 -> len - 1` for every
/// density > 0.
///
/// The remap is a fractional power, so a sample below -1 hands `powf` a
/// negative base and produces NaN. That case is resolved explicitly: a
/// non-finite remap result maps to the palette boundary on the side of the
/// pre-remap normalized value (0 when negative, `len - 1` otherwise). NaN
/// never reaches the index arithmetic.
pub fn glyph_index(value: f64, density: f64, len: usize) -> usize {
    debug_assert!(len >= 1);
    debug_assert!(density > 0.0);

    let n = (value + 1.0) / 2.0;
    let a = n.powf(1.0 / density);

    if !a.is_finite() {
        return if n < 0.0 { 0 } else { len - 1 };
    }

    // f64 -> usize casts saturate, but clamp in float space anyway so the
    // intent is visible.
    let idx = (a * len as f64).floor();
    if idx < 0.0 {
        0
    } else if idx > (len - 1) as f64 {
        len - 1
    } else {
        idx as usize
    }
}

/// Convenience wrapper resolving the index straight to a palette glyph.
#[inline]
pub fn to_glyph<'a>(value: f64, density: f64, palette: &'a Palette) -> &'a str {
    palette.glyph(glyph_index(value, density, palette.len()))
}
