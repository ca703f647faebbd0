//! Per-document parsing functions.
//!
//! Each function takes one decoded JSON document and either returns a
//! name list or records results into an [`OreSurvey`]. Variant keys are
//! `-` delimited: graded ores are `<type>-<grade>-<ore>-<rock>`, ungraded
//! ores `<type>-<ore>-<rock>`.

use serde_json::Value;

use crate::error::{OreDataError, OreDataResult};
use crate::survey::{OreSurvey, GRADE_EXISTS};

/// Object keys of a named top-level collection.
fn collection_keys<'a>(doc: &'a Value, name: &str) -> OreDataResult<Vec<&'a str>> {
    doc.get(name)
        .and_then(Value::as_object)
        .map(|map| map.keys().map(String::as_str).collect())
        .ok_or_else(|| OreDataError::MissingCollection(name.to_string()))
}

/// String entries of a named top-level array.
fn collection_strings<'a>(doc: &'a Value, name: &str) -> OreDataResult<Vec<&'a str>> {
    let entries = doc
        .get(name)
        .and_then(Value::as_array)
        .ok_or_else(|| OreDataError::MissingCollection(name.to_string()))?;
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .ok_or_else(|| OreDataError::NonStringEntry(name.to_string()))
        })
        .collect()
}

/// Ore names from a nugget item document.
///
/// Each key of `combustiblePropsByType` is split on the first `*-`; the
/// remainder is an ore name. Returns the deduplicated list in encounter
/// order.
pub fn parse_nugget_items(doc: &Value) -> OreDataResult<Vec<String>> {
    let mut ores = Vec::new();
    for key in collection_keys(doc, "combustiblePropsByType")? {
        let (_, ore) = key
            .split_once("*-")
            .ok_or_else(|| OreDataError::MalformedVariant(key.to_string()))?;
        if !ores.iter().any(|o| o == ore) {
            ores.push(ore.to_string());
        }
    }
    Ok(ores)
}

/// Record graded ore variants (`<type>-<grade>-<ore>-<rock>`).
pub fn parse_graded_ores(doc: &Value, survey: &mut OreSurvey) -> OreDataResult<()> {
    for entry in collection_strings(doc, "allowedVariants")? {
        let parts: Vec<&str> = entry.split('-').collect();
        if parts.len() < 4 {
            return Err(OreDataError::MalformedVariant(entry.to_string()));
        }
        let (grade, ore, rock) = (parts[1], parts[2], parts[3]);
        survey.add_grade(ore, rock, grade);
    }
    Ok(())
}

/// Record ungraded ore variants (`<type>-<ore>-<rock>`) with the
/// `exists` grade sentinel.
pub fn parse_ungraded_ores(doc: &Value, survey: &mut OreSurvey) -> OreDataResult<()> {
    for entry in collection_strings(doc, "allowedVariants")? {
        let parts: Vec<&str> = entry.split('-').collect();
        if parts.len() < 3 {
            return Err(OreDataError::MalformedVariant(entry.to_string()));
        }
        let (ore, rock) = (parts[1], parts[2]);
        survey.add_grade(ore, rock, GRADE_EXISTS);
    }
    Ok(())
}

/// Rock names from a stone item document.
///
/// Keeps only keys of `attributesByType` containing `stone`, split on
/// the first `-`.
pub fn parse_stone_rocks(doc: &Value) -> OreDataResult<Vec<String>> {
    let mut rocks = Vec::new();
    for key in collection_keys(doc, "attributesByType")? {
        if !key.contains("stone") {
            continue;
        }
        let (_, rock) = key
            .split_once('-')
            .ok_or_else(|| OreDataError::MalformedVariant(key.to_string()))?;
        rocks.push(rock.to_string());
    }
    Ok(rocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nugget_parser_keeps_remainder_after_star_dash() {
        let doc = json!({
            "combustiblePropsByType": {
                "nugget-*-copper": 1,
                "nugget-*-cassiterite": 2,
                "other-*-copper": 3
            }
        });
        let ores = parse_nugget_items(&doc).unwrap();
        assert_eq!(ores, vec!["copper", "cassiterite"]);
    }

    #[test]
    fn test_nugget_parser_preserves_document_key_order() {
        // Keys must come out in document order, not sorted
        let doc: Value = serde_json::from_str(
            r#"{ "combustiblePropsByType": { "nugget-*-tin": 1, "nugget-*-copper": 2, "nugget-*-bismuth": 3 } }"#,
        )
        .unwrap();
        let ores = parse_nugget_items(&doc).unwrap();
        assert_eq!(ores, vec!["tin", "copper", "bismuth"]);
    }

    #[test]
    fn test_nugget_parser_rejects_key_without_star_dash() {
        let doc = json!({ "combustiblePropsByType": { "plainkey": 1 } });
        assert!(matches!(
            parse_nugget_items(&doc),
            Err(OreDataError::MalformedVariant(_))
        ));
    }

    #[test]
    fn test_graded_parser_splits_grade_ore_rock() {
        let doc = json!({ "allowedVariants": ["ore-2-copper-granite"] });
        let mut survey = OreSurvey::new();
        parse_graded_ores(&doc, &mut survey).unwrap();
        assert_eq!(survey.grades["copper"]["granite"], vec!["2"]);
        assert_eq!(survey.rocks, vec!["granite"]);
    }

    #[test]
    fn test_graded_parser_does_not_duplicate_grades() {
        let doc = json!({
            "allowedVariants": ["ore-2-copper-granite", "ore-2-copper-granite"]
        });
        let mut survey = OreSurvey::new();
        parse_graded_ores(&doc, &mut survey).unwrap();
        assert_eq!(survey.grades["copper"]["granite"], vec!["2"]);
    }

    #[test]
    fn test_graded_parser_wildcard_rock_excluded_from_rock_list() {
        let doc = json!({ "allowedVariants": ["ore-1-gold-*"] });
        let mut survey = OreSurvey::new();
        parse_graded_ores(&doc, &mut survey).unwrap();
        assert_eq!(survey.grades["gold"]["*"], vec!["1"]);
        assert!(survey.rocks.is_empty());
    }

    #[test]
    fn test_graded_parser_rejects_short_variant() {
        let doc = json!({ "allowedVariants": ["ore-copper"] });
        let mut survey = OreSurvey::new();
        assert!(parse_graded_ores(&doc, &mut survey).is_err());
    }

    #[test]
    fn test_ungraded_parser_uses_exists_sentinel() {
        let doc = json!({ "allowedVariants": ["ore-copper-granite"] });
        let mut survey = OreSurvey::new();
        parse_ungraded_ores(&doc, &mut survey).unwrap();
        assert_eq!(survey.grades["copper"]["granite"], vec!["exists"]);
    }

    #[test]
    fn test_ungraded_parser_exists_not_duplicated() {
        let doc = json!({
            "allowedVariants": ["ore-copper-granite", "rock-copper-granite"]
        });
        let mut survey = OreSurvey::new();
        parse_ungraded_ores(&doc, &mut survey).unwrap();
        assert_eq!(survey.grades["copper"]["granite"], vec!["exists"]);
    }

    #[test]
    fn test_stone_parser_filters_on_substring() {
        let doc = json!({
            "attributesByType": {
                "stone-granite": {},
                "stone-basalt": {},
                "gravel-basalt": {}
            }
        });
        let rocks = parse_stone_rocks(&doc).unwrap();
        assert_eq!(rocks, vec!["granite", "basalt"]);
    }

    #[test]
    fn test_missing_collection_is_an_error() {
        let doc = json!({});
        assert!(matches!(
            parse_nugget_items(&doc),
            Err(OreDataError::MissingCollection(_))
        ));
        let mut survey = OreSurvey::new();
        assert!(parse_graded_ores(&doc, &mut survey).is_err());
    }
}
