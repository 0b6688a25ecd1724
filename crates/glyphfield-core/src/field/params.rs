/// Per-frame rendering configuration. Immutable for the duration of one
/// render call; the shell owns it and passes it in by reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternParams {
    /// Spatial frequency multiplier applied inside every field.
    pub scale: f64,
    /// Temporal frequency multiplier applied inside every field.
    pub speed: f64,
    /// Grid columns. Must be > 0.
    pub width: u32,
    /// Grid rows. Must be > 0.
    pub height: u32,
    /// Palette distribution exponent knob; the quantizer raises the
    /// normalized sample to 1/density. Must be > 0.
    pub density: f64,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            scale: 0.2,
            speed: 5.0,
            width: 60,
            height: 30,
            density: 0.3,
        }
    }
}

impl PatternParams {
    /// Grid center, the polar origin for the radial fields.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}
