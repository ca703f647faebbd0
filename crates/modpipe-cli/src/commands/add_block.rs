//! `modpipe add-block` - block scaffolding.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use modpipe_scaffold::{BlockGenerator, BlockOptions, GeneratorConfig, WriteOutcome};

#[derive(Args)]
pub struct AddBlockArgs {
    /// CamelCase name of the block to add
    pub name: String,

    /// Overwrite files even if they exist (be careful!)
    #[arg(long)]
    pub force: bool,

    /// Generate additional code for a tile entity
    #[arg(long)]
    pub tile: bool,

    /// Generate additional code for container and gui (implies tile!)
    #[arg(long)]
    pub gui: bool,

    /// Prevent generating json
    #[arg(long = "nojson")]
    pub nojson: bool,

    /// Mod project root the generated tree is placed under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: AddBlockArgs) -> Result<()> {
    println!("Adding block {}", args.name);

    let config = GeneratorConfig::default().rooted(&args.root);
    let generator = BlockGenerator::new(config);
    // Report each artifact as it lands, so a failing run still shows
    // what was written before the failure
    generator.generate_block_with(
        &args.name,
        BlockOptions {
            force: args.force,
            gui: args.gui,
            tile: args.tile,
            skip_json: args.nojson,
        },
        |outcome| {
            let file_name = outcome.path().file_name().unwrap_or_default();
            match outcome {
                WriteOutcome::Generated(_) => {
                    println!("Generated '{}'", file_name.to_string_lossy());
                }
                WriteOutcome::Skipped(_) => {
                    println!(
                        "File '{}' already exists. Not generated",
                        file_name.to_string_lossy()
                    );
                }
            }
        },
    )?;

    Ok(())
}
