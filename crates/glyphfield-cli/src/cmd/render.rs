use clap::Args;
use glyphfield_core::render;

use crate::cmd::SceneArgs;

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Frame counter value to render
    #[arg(long, default_value_t = 0)]
    pub frame: u64,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let (pattern, params, palette) = args.scene.build()?;
    let grid = render(pattern, args.frame, &params, &palette, args.scene.pointer())?;
    print!("{grid}");
    Ok(())
}
