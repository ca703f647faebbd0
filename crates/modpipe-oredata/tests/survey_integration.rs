//! End-to-end survey run over a fixture document tree.

use std::fs;
use std::path::Path;

use modpipe_oredata::run_survey;
use tempfile::TempDir;

fn write_doc(prefix: &Path, relative: &str, content: &str) {
    let path = prefix.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_fixture_tree(prefix: &Path) {
    write_doc(
        prefix,
        "itemtypes/resource/nugget.json",
        r#"{ "combustiblePropsByType": { "nugget-*-copper": {}, "nugget-*-cassiterite": {} } }"#,
    );
    write_doc(
        prefix,
        "itemtypes/resource/ore-graded.json",
        r#"{ "allowedVariants": ["ore-2-copper-granite", "ore-1-copper-granite", "ore-2-copper-basalt"] }"#,
    );
    write_doc(
        prefix,
        "itemtypes/resource/ore-ungraded.json",
        r#"{ "allowedVariants": ["ore-quartz-granite"] }"#,
    );
    write_doc(
        prefix,
        "itemtypes/resource/crystalizedore-graded.json",
        r#"{ "allowedVariants": ["ore-3-emerald-*"] }"#,
    );
    write_doc(
        prefix,
        "itemtypes/resource/stone.json",
        r#"{ "attributesByType": { "stone-andesite": {}, "stone-granite": {}, "flint-black": {} } }"#,
    );
    write_doc(
        prefix,
        "blocktypes/stone/looseores.json",
        r#"{ "allowedVariants": ["looseores-copper-granite"] }"#,
    );
    write_doc(
        prefix,
        "blocktypes/stone/ore-gem.json",
        r#"{ "allowedVariants": ["gem-1-diamond-kimberlite"] }"#,
    );
    write_doc(
        prefix,
        "blocktypes/stone/ore-graded.json",
        r#"{ "allowedVariants": ["ore-2-tin-basalt"] }"#,
    );
    write_doc(
        prefix,
        "blocktypes/stone/ore-ungraded.json",
        r#"{ "allowedVariants": ["ore-sulfur-limestone"] }"#,
    );
}

#[test]
fn survey_aggregates_all_nine_documents() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture_tree(temp_dir.path());

    let survey = run_survey(temp_dir.path()).unwrap();

    // Nugget ores, in document key order
    assert_eq!(survey.ores, vec!["copper", "cassiterite"]);

    // Grades accumulate across graded and ungraded documents
    assert_eq!(survey.grades["copper"]["granite"], vec!["2", "1", "exists"]);
    assert_eq!(survey.grades["copper"]["basalt"], vec!["2"]);
    assert_eq!(survey.grades["quartz"]["granite"], vec!["exists"]);
    assert_eq!(survey.grades["emerald"]["*"], vec!["3"]);
    assert_eq!(survey.grades["diamond"]["kimberlite"], vec!["1"]);
    assert_eq!(survey.grades["tin"]["basalt"], vec!["2"]);
    assert_eq!(survey.grades["sulfur"]["limestone"], vec!["exists"]);

    // Rock list: encounter order, wildcard excluded, stone-document
    // names merged in, no duplicates
    assert_eq!(
        survey.rocks,
        vec!["granite", "basalt", "andesite", "kimberlite", "limestone"]
    );
}

#[test]
fn survey_fails_on_missing_document() {
    let temp_dir = TempDir::new().unwrap();
    // Deliberately empty tree
    assert!(run_survey(temp_dir.path()).is_err());
}

#[test]
fn survey_fails_on_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture_tree(temp_dir.path());
    write_doc(temp_dir.path(), "itemtypes/resource/nugget.json", "{ not json");
    assert!(run_survey(temp_dir.path()).is_err());
}
