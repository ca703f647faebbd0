//! modpipe - content-pipeline utilities for mod development.
//!
//! Three independent batch utilities behind one binary: block
//! scaffolding, ore-data cross-referencing, and texture compositing.
//! They share no state; each subcommand reads its inputs, transforms
//! them, writes its outputs and exits.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "modpipe", version, about = "Content-pipeline utilities for mod development")]
struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scaffold source and resource files for a new block
    AddBlock(commands::add_block::AddBlockArgs),
    /// Cross-reference game data files and print ore/rock associations
    OreSurvey(commands::ore_survey::OreSurveyArgs),
    /// Composite tinted ore templates onto stone textures
    Texgen(commands::texgen::TexgenArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::AddBlock(args) => commands::add_block::run(args),
        Command::OreSurvey(args) => commands::ore_survey::run(args),
        Command::Texgen(args) => commands::texgen::run(args),
    }
}
