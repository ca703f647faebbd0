//! Generator configuration.
//!
//! One immutable configuration value constructed at process start and
//! passed explicitly into the generator; there is no module-level state.

use std::path::{Path, PathBuf};

/// Configuration for the block scaffolding generator.
///
/// Paths are relative to the mod project root unless
/// [`rooted`](Self::rooted) is used to anchor them elsewhere.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Source-level reference to the mod id constant, used inside
    /// generated code
    pub modid_ref: String,
    /// The mod id as it appears in resource JSON
    pub modid: String,
    /// Root package of the mod's source tree
    pub root_package: String,
    /// Directory of the mod's source root
    pub source_root: PathBuf,
    /// Directory of the mod's asset resources
    pub asset_resource_root: PathBuf,
    /// Directory of the mod's data resources
    pub data_resource_root: PathBuf,
    /// File extension for generated source artifacts
    pub source_extension: String,
    /// Subpackage for generated block classes
    pub package_blocks: String,
    /// Subpackage for generated tile entity classes
    pub package_tiles: String,
    /// Subpackage for generated container classes
    pub package_containers: String,
    /// Subpackage for generated screen classes
    pub package_screens: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            modid_ref: "org.eln2.MODID".to_string(),
            modid: "eln2".to_string(),
            root_package: "org.eln2".to_string(),
            source_root: PathBuf::from("src/main/kotlin/org/eln2"),
            asset_resource_root: PathBuf::from("src/main/resources/assets/eln2"),
            data_resource_root: PathBuf::from("src/main/resources/data/eln2"),
            source_extension: "kt".to_string(),
            package_blocks: "blocks".to_string(),
            package_tiles: "blocks".to_string(),
            package_containers: "blocks".to_string(),
            package_screens: "blocks".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Re-anchor the three output roots under a project directory.
    pub fn rooted(mut self, root: &Path) -> Self {
        self.source_root = root.join(&self.source_root);
        self.asset_resource_root = root.join(&self.asset_resource_root);
        self.data_resource_root = root.join(&self.data_resource_root);
        self
    }
}
