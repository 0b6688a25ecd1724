use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Args;
use glyphfield_core::{render_at, AnimationClock};

use crate::cmd::SceneArgs;

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Scheduling slots per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Stop after this many frames; runs until interrupted if omitted
    #[arg(long)]
    pub frames: Option<u64>,
}

pub fn run(args: PlayArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }

    let (pattern, params, palette) = args.scene.build()?;
    let pointer = args.scene.pointer();
    let slot = Duration::from_secs_f64(1.0 / args.fps as f64);

    let mut clock = AnimationClock::new();
    let mut stdout = io::stdout();

    loop {
        let grid = render_at(pattern, clock.time(), &params, &palette, pointer)?;

        // Clear screen, home cursor, draw.
        write!(stdout, "\x1b[2J\x1b[H{grid}")?;
        stdout.flush()?;

        clock.tick();
        if let Some(limit) = args.frames {
            if clock.frame() >= limit {
                break;
            }
        }
        thread::sleep(slot);
    }

    Ok(())
}
