pub mod export;
pub mod list;
pub mod play;
pub mod render;

use clap::Args;
use glyphfield_core::{Palette, PalettePreset, Pattern, PatternParams, PointerState};

/// Scene configuration shared by the render/play/export commands. This is
/// the "parameter record" the core expects from its shell.
#[derive(Args)]
pub struct SceneArgs {
    /// Pattern name (see `list`)
    #[arg(long, default_value = "waves")]
    pub pattern: String,

    /// Spatial frequency
    #[arg(long, default_value_t = 0.2)]
    pub scale: f64,

    /// Temporal frequency
    #[arg(long, default_value_t = 5.0)]
    pub speed: f64,

    /// Grid columns
    #[arg(long, default_value_t = 60)]
    pub width: u32,

    /// Grid rows
    #[arg(long, default_value_t = 30)]
    pub height: u32,

    /// Palette distribution exponent knob
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Palette preset name (see `list`)
    #[arg(long, default_value = "blocks")]
    pub preset: String,

    /// Custom palette characters; overrides --preset
    #[arg(long)]
    pub chars: Option<String>,

    /// Engaged pointer x in grid coordinates (requires --pointer-y)
    #[arg(long, requires = "pointer_y")]
    pub pointer_x: Option<f64>,

    /// Engaged pointer y in grid coordinates (requires --pointer-x)
    #[arg(long, requires = "pointer_x")]
    pub pointer_y: Option<f64>,
}

impl SceneArgs {
    pub fn build(&self) -> anyhow::Result<(Pattern, PatternParams, Palette)> {
        let pattern: Pattern = self.pattern.parse()?;

        let palette = match self.chars.as_deref() {
            Some(chars) => Palette::new(chars)?,
            None => Palette::from(self.preset.parse::<PalettePreset>()?),
        };

        let params = PatternParams {
            scale: self.scale,
            speed: self.speed,
            width: self.width,
            height: self.height,
            density: self.density,
        };

        Ok((pattern, params, palette))
    }

    pub fn pointer(&self) -> Option<PointerState> {
        match (self.pointer_x, self.pointer_y) {
            (Some(x), Some(y)) => Some(PointerState::new(x, y, true)),
            _ => None,
        }
    }
}
