// crates/glyphfield-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glyphfield-cli")]
#[command(about = "Animated text-pattern field renderer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single frame to stdout
    Render(cmd::render::RenderArgs),

    /// Animate frames in the terminal
    Play(cmd::play::PlayArgs),

    /// Render a frame and write it as pattern-<name>-<millis>.txt
    Export(cmd::export::ExportArgs),

    /// List registered patterns and palette presets
    List(cmd::list::ListArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render(args) => cmd::render::run(args),
        Commands::Play(args) => cmd::play::run(args),
        Commands::Export(args) => cmd::export::run(args),
        Commands::List(args) => cmd::list::run(args),
    }
}
