//! `modpipe ore-survey` - game-data cross-referencing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use modpipe_oredata::run_survey;

#[derive(Args)]
pub struct OreSurveyArgs {
    /// Directory holding the game-data JSON tree
    #[arg(long, default_value = ".")]
    pub prefix: PathBuf,
}

pub fn run(args: OreSurveyArgs) -> Result<()> {
    let survey = run_survey(&args.prefix)?;
    print!("{survey}");
    Ok(())
}
