use clap::Args;
use glyphfield_core::{PalettePreset, Pattern};

#[derive(Args)]
pub struct ListArgs {}

pub fn run(_args: ListArgs) -> anyhow::Result<()> {
    println!("patterns:");
    for pattern in Pattern::ALL {
        println!("  {pattern}");
    }

    println!("palette presets:");
    for preset in PalettePreset::ALL {
        println!("  {:<10} {}", preset.name(), preset.chars());
    }

    Ok(())
}
