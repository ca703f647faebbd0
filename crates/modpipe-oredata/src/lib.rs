//! Ore/rock cross-referencer.
//!
//! Loads a fixed set of game-data JSON files, splits their delimited
//! variant keys into ore, rock and grade components, and aggregates the
//! results into one report: the ore names seen, the rock types seen, and
//! a nested ore -> rock -> grades mapping.

pub mod error;
pub mod parsers;
pub mod survey;

pub use error::{OreDataError, OreDataResult};
pub use parsers::{parse_graded_ores, parse_nugget_items, parse_stone_rocks, parse_ungraded_ores};
pub use survey::{run_survey, OreSurvey};
