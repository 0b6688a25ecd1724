use std::path::PathBuf;

use clap::Args;
use glyphfield_core::export::{file_name, unix_millis, write_grid};
use glyphfield_core::render;

use crate::cmd::SceneArgs;

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Frame counter value to export
    #[arg(long, default_value_t = 0)]
    pub frame: u64,

    /// Directory for the exported file (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let (pattern, params, palette) = args.scene.build()?;
    let grid = render(pattern, args.frame, &params, &palette, args.scene.pointer())?;

    let path = args.out_dir.join(file_name(pattern, unix_millis()));
    write_grid(&path, &grid)?;

    println!("{}", path.display());
    Ok(())
}
