//! Artifact writer.
//!
//! Computes target paths from a root directory and a dotted package
//! string, creates parent directories, and writes rendered templates.
//! Existing files are skipped unless `force` is set; under `force` the
//! prior content is unconditionally replaced.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::template::{render_str, RenderContext};

/// Outcome of one artifact write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The artifact was rendered and written
    Generated(PathBuf),
    /// The artifact already existed and was left untouched
    Skipped(PathBuf),
}

impl WriteOutcome {
    /// Path of the artifact this outcome refers to.
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Generated(path) | WriteOutcome::Skipped(path) => path,
        }
    }

    /// Whether the artifact was written by this call.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteOutcome::Generated(_))
    }
}

/// Write a source artifact `{base}{suffix}.{extension}` under
/// `root/<package-as-path>/`.
pub fn write_source(
    root: &Path,
    package: &str,
    base: &str,
    suffix: &str,
    extension: &str,
    force: bool,
    template: &str,
    ctx: &RenderContext,
) -> ScaffoldResult<WriteOutcome> {
    let dir = package_path(root, package);
    let path = dir.join(format!("{base}{suffix}.{extension}"));
    write_rendered(&dir, path, force, template, ctx)
}

/// Write a JSON artifact under `root/<package-as-path>/`.
///
/// Differs from [`write_source`] only in filename derivation: the base
/// name is lower-cased, there is no suffix, and the extension is always
/// `json`.
pub fn write_json(
    root: &Path,
    package: &str,
    base: &str,
    force: bool,
    template: &str,
    ctx: &RenderContext,
) -> ScaffoldResult<WriteOutcome> {
    let dir = package_path(root, package);
    let path = dir.join(format!("{}.json", base.to_lowercase()));
    write_rendered(&dir, path, force, template, ctx)
}

/// Join a dotted package string onto a root, one directory per segment.
fn package_path(root: &Path, package: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in package.split('.') {
        path.push(segment);
    }
    path
}

fn write_rendered(
    dir: &Path,
    path: PathBuf,
    force: bool,
    template: &str,
    ctx: &RenderContext,
) -> ScaffoldResult<WriteOutcome> {
    fs::create_dir_all(dir).map_err(|source| ScaffoldError::CreateDirFailed {
        path: dir.to_path_buf(),
        source,
    })?;

    if !force && path.exists() {
        debug!(path = %path.display(), "artifact exists, skipped");
        return Ok(WriteOutcome::Skipped(path));
    }

    let content = render_str(template, ctx);
    fs::write(&path, content).map_err(|source| ScaffoldError::WriteFailed {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "artifact generated");
    Ok(WriteOutcome::Generated(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx() -> RenderContext {
        RenderContext::new().input("name", "Cable")
    }

    #[test]
    fn test_write_source_creates_nested_package_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = write_source(
            temp_dir.path(),
            "blocks.cable",
            "Cable",
            "Block",
            "kt",
            false,
            "class ${name}Block",
            &ctx(),
        )
        .unwrap();

        let expected = temp_dir.path().join("blocks/cable/CableBlock.kt");
        assert_eq!(outcome, WriteOutcome::Generated(expected.clone()));
        assert_eq!(fs::read_to_string(expected).unwrap(), "class CableBlock");
    }

    #[test]
    fn test_existing_file_skipped_without_force() {
        let temp_dir = TempDir::new().unwrap();
        write_source(
            temp_dir.path(),
            "blocks",
            "Cable",
            "Block",
            "kt",
            false,
            "first ${name}",
            &ctx(),
        )
        .unwrap();

        let outcome = write_source(
            temp_dir.path(),
            "blocks",
            "Cable",
            "Block",
            "kt",
            false,
            "second ${name}",
            &ctx(),
        )
        .unwrap();

        assert!(!outcome.was_written());
        let content = fs::read_to_string(temp_dir.path().join("blocks/CableBlock.kt")).unwrap();
        assert_eq!(content, "first Cable");
    }

    #[test]
    fn test_force_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        write_source(
            temp_dir.path(),
            "blocks",
            "Cable",
            "Block",
            "kt",
            false,
            "first ${name}",
            &ctx(),
        )
        .unwrap();

        let outcome = write_source(
            temp_dir.path(),
            "blocks",
            "Cable",
            "Block",
            "kt",
            true,
            "second ${name}",
            &ctx(),
        )
        .unwrap();

        assert!(outcome.was_written());
        let content = fs::read_to_string(temp_dir.path().join("blocks/CableBlock.kt")).unwrap();
        assert_eq!(content, "second Cable");
    }

    #[test]
    fn test_write_json_lowercases_name_and_uses_json_extension() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = write_json(
            temp_dir.path(),
            "models.block",
            "CopperCable",
            false,
            "{\"model\": \"$L{name}\"}",
            &ctx().input("name", "CopperCable"),
        )
        .unwrap();

        let expected = temp_dir.path().join("models/block/coppercable.json");
        assert_eq!(outcome.path(), expected);
        let content = fs::read_to_string(expected).unwrap();
        assert!(content.contains("coppercable"));
    }
}
