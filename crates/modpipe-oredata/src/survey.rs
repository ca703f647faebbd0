//! Survey accumulators and the fixed nine-document runner.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{OreDataError, OreDataResult};
use crate::parsers;

/// Grade sentinel recorded for ungraded ore variants.
pub const GRADE_EXISTS: &str = "exists";

/// Wildcard rock type; kept in the nested mapping, excluded from the
/// standalone rock list.
pub const WILDCARD_ROCK: &str = "*";

/// Aggregated ore/rock associations.
///
/// `ores` and `rocks` are deduplicated in encounter order. Grade lists
/// are deduplicated in encounter order; the nested maps iterate sorted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OreSurvey {
    /// Plain ore/item names
    pub ores: Vec<String>,
    /// Rock type names (wildcards excluded)
    pub rocks: Vec<String>,
    /// ore -> rock -> grades
    pub grades: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl OreSurvey {
    /// Create an empty survey.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an ore name, keeping the list deduplicated.
    pub fn add_ore(&mut self, ore: &str) {
        if !self.ores.iter().any(|o| o == ore) {
            self.ores.push(ore.to_string());
        }
    }

    /// Record a rock type, skipping duplicates and the wildcard.
    pub fn add_rock(&mut self, rock: &str) {
        if rock != WILDCARD_ROCK && !self.rocks.iter().any(|r| r == rock) {
            self.rocks.push(rock.to_string());
        }
    }

    /// Record a grade for an ore/rock pair, skipping duplicates.
    ///
    /// Wildcard rocks are recorded here but never in the rock list.
    pub fn add_grade(&mut self, ore: &str, rock: &str, grade: &str) {
        let grades = self
            .grades
            .entry(ore.to_string())
            .or_default()
            .entry(rock.to_string())
            .or_default();
        if !grades.iter().any(|g| g == grade) {
            grades.push(grade.to_string());
        }
        self.add_rock(rock);
    }
}

impl fmt::Display for OreSurvey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ores = serde_json::to_string_pretty(&self.ores).map_err(|_| fmt::Error)?;
        let rocks = serde_json::to_string_pretty(&self.rocks).map_err(|_| fmt::Error)?;
        let grades = serde_json::to_string_pretty(&self.grades).map_err(|_| fmt::Error)?;
        writeln!(f, "ores = {ores}")?;
        writeln!(f, "rocks = {rocks}")?;
        writeln!(f, "grades = {grades}")
    }
}

/// The nine fixed input documents, relative to the survey prefix.
pub const SURVEY_FILES: [(&str, &str); 9] = [
    ("item-nugget", "itemtypes/resource/nugget.json"),
    ("item-ore-graded", "itemtypes/resource/ore-graded.json"),
    ("item-ore-ungraded", "itemtypes/resource/ore-ungraded.json"),
    (
        "item-crystalized-ore",
        "itemtypes/resource/crystalizedore-graded.json",
    ),
    ("item-stone", "itemtypes/resource/stone.json"),
    ("block-looseores", "blocktypes/stone/looseores.json"),
    ("block-ore-gem", "blocktypes/stone/ore-gem.json"),
    ("block-ore-graded", "blocktypes/stone/ore-graded.json"),
    ("block-ore-ungraded", "blocktypes/stone/ore-ungraded.json"),
];

fn load_document(prefix: &Path, relative: &str) -> OreDataResult<Value> {
    let path = prefix.join(relative);
    debug!(path = %path.display(), "loading survey document");
    let text = fs::read_to_string(&path).map_err(|source| OreDataError::ReadFailed {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| OreDataError::InvalidJson { path, source })
}

/// Load the nine documents under `prefix` and run the fixed parse
/// sequence, returning the populated survey.
pub fn run_survey(prefix: &Path) -> OreDataResult<OreSurvey> {
    let mut docs = BTreeMap::new();
    for (label, relative) in SURVEY_FILES {
        docs.insert(label, load_document(prefix, relative)?);
    }

    let mut survey = OreSurvey::new();

    for ore in parsers::parse_nugget_items(&docs["item-nugget"])? {
        survey.add_ore(&ore);
    }
    parsers::parse_graded_ores(&docs["item-ore-graded"], &mut survey)?;
    parsers::parse_ungraded_ores(&docs["item-ore-ungraded"], &mut survey)?;
    parsers::parse_graded_ores(&docs["item-crystalized-ore"], &mut survey)?;
    for rock in parsers::parse_stone_rocks(&docs["item-stone"])? {
        survey.add_rock(&rock);
    }
    parsers::parse_ungraded_ores(&docs["block-looseores"], &mut survey)?;
    parsers::parse_graded_ores(&docs["block-ore-gem"], &mut survey)?;
    parsers::parse_graded_ores(&docs["block-ore-graded"], &mut survey)?;
    parsers::parse_ungraded_ores(&docs["block-ore-ungraded"], &mut survey)?;

    Ok(survey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ore_deduplicates_in_encounter_order() {
        let mut survey = OreSurvey::new();
        survey.add_ore("copper");
        survey.add_ore("tin");
        survey.add_ore("copper");
        assert_eq!(survey.ores, vec!["copper", "tin"]);
    }

    #[test]
    fn test_add_rock_skips_wildcard() {
        let mut survey = OreSurvey::new();
        survey.add_rock("granite");
        survey.add_rock("*");
        survey.add_rock("granite");
        assert_eq!(survey.rocks, vec!["granite"]);
    }

    #[test]
    fn test_add_grade_records_wildcard_in_mapping_only() {
        let mut survey = OreSurvey::new();
        survey.add_grade("copper", "*", "2");
        assert_eq!(survey.grades["copper"]["*"], vec!["2"]);
        assert!(survey.rocks.is_empty());
    }

    #[test]
    fn test_add_grade_deduplicates() {
        let mut survey = OreSurvey::new();
        survey.add_grade("copper", "granite", "2");
        survey.add_grade("copper", "granite", "2");
        survey.add_grade("copper", "granite", "1");
        assert_eq!(survey.grades["copper"]["granite"], vec!["2", "1"]);
    }

    #[test]
    fn test_display_prints_all_three_sections() {
        let mut survey = OreSurvey::new();
        survey.add_ore("copper");
        survey.add_grade("copper", "granite", "2");
        let report = survey.to_string();
        assert!(report.contains("ores = "));
        assert!(report.contains("rocks = "));
        assert!(report.contains("grades = "));
        assert!(report.contains("granite"));
    }
}
