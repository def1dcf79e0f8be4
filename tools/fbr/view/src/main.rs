mod export;
mod parse;
mod scene;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::util::SubscriberInitExt;

use fbr_core::memory::MEMORY_SIZE;
use fbr_core::{DrawColors, HostMemory, Palette};

use crate::scene::Scene;

#[derive(Parser)]
#[command(name = "fbr-view")]
#[command(version, about = "Render a framebuffer demo scene to PNG", long_about = None)]
struct Cli {
    /// Output .png path
    #[arg(short, long, default_value = "frame.png")]
    output: PathBuf,

    /// Integer upscale factor
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=16))]
    scale: u32,

    /// Which scene to draw
    #[arg(long, value_enum, default_value_t = Scene::All)]
    scene: Scene,

    /// Four comma separated RRGGBB colors, e.g. e0f8cf,86c06c,306850,071821
    #[arg(long, value_parser = parse::palette)]
    palette: Option<Palette>,

    /// Draw-color register the scene starts with, e.g. 0x1203
    #[arg(long, value_parser = parse::draw_colors)]
    draw_colors: Option<DrawColors>,

    /// Log draw calls
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .finish()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut ram = vec![0u8; MEMORY_SIZE];
    let mut memory = HostMemory::new(&mut ram).context("failed to map display memory")?;
    memory.reset();

    if let Some(palette) = cli.palette {
        memory.set_palette(palette);
    }
    if let Some(draw_colors) = cli.draw_colors {
        memory.set_draw_colors(draw_colors);
    }

    info!("drawing {:?} with draw colors {:#06x}", cli.scene, memory.draw_colors().0);
    scene::draw(cli.scene, &mut memory);

    export::write_png(&mut memory, cli.scale, &cli.output)?;
    info!("wrote {}", cli.output.display());

    Ok(())
}
