//! Subcommand implementations.

pub mod add_block;
pub mod ore_survey;
pub mod texgen;
