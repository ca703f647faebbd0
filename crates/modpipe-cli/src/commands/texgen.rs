//! `modpipe texgen` - texture compositing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use modpipe_texgen::{composite_all, CompositorConfig};

#[derive(Args)]
pub struct TexgenArgs {
    /// Ore color table CSV
    #[arg(long, default_value = "ore_hex_color.csv")]
    pub colors: PathBuf,

    /// Directory of template mask PNGs
    #[arg(long, default_value = "template")]
    pub templates: PathBuf,

    /// Directory of stone base textures
    #[arg(long)]
    pub stones: PathBuf,

    /// Output directory for composited PNGs
    #[arg(long, default_value = "output")]
    pub output: PathBuf,
}

pub fn run(args: TexgenArgs) -> Result<()> {
    let config = CompositorConfig {
        colors: args.colors,
        templates_dir: args.templates,
        stones_dir: args.stones,
        output_dir: args.output,
    };

    let written = composite_all(&config)?;
    println!("Wrote {} composited textures", written.len());
    Ok(())
}
