//! Block scaffolding orchestrator.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::ScaffoldResult;
use crate::template::RenderContext;
use crate::templates;
use crate::writer::{write_json, write_source, WriteOutcome};

/// Flags controlling one block generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockOptions {
    /// Overwrite existing artifacts
    pub force: bool,
    /// Generate container and screen sources (implies `tile`)
    pub gui: bool,
    /// Generate a tile entity source
    pub tile: bool,
    /// Skip the JSON resource artifacts
    pub skip_json: bool,
}

/// Generates the scaffold artifact set for a new block.
pub struct BlockGenerator {
    config: GeneratorConfig,
}

impl BlockGenerator {
    /// Create a generator over a configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate all artifacts for `name` according to `opts`.
    ///
    /// Always emits the Block source; emits the Tile source when `gui`
    /// or `tile` is set, Container and Screen when `gui` is set, and the
    /// five resource JSON files unless `skip_json` is set. Generation is
    /// not transactional: artifacts written before a failure stay on
    /// disk.
    pub fn generate_block(
        &self,
        name: &str,
        opts: BlockOptions,
    ) -> ScaffoldResult<Vec<WriteOutcome>> {
        self.generate_block_with(name, opts, |_| {})
    }

    /// Like [`generate_block`](Self::generate_block), invoking `report`
    /// for each artifact as it is written or skipped.
    ///
    /// Because generation is not transactional, the callback is the way
    /// to surface per-artifact outcomes that precede a mid-batch
    /// failure.
    pub fn generate_block_with(
        &self,
        name: &str,
        opts: BlockOptions,
        mut report: impl FnMut(&WriteOutcome),
    ) -> ScaffoldResult<Vec<WriteOutcome>> {
        let tile = opts.gui || opts.tile;
        debug!(name, gui = opts.gui, tile, skip_json = opts.skip_json, "generating block");

        let config = &self.config;
        let ext = config.source_extension.as_str();
        let mut outcomes = Vec::new();
        let mut emit = |outcome: WriteOutcome| {
            report(&outcome);
            outcomes.push(outcome);
        };

        emit(write_source(
            &config.source_root,
            &config.package_blocks,
            name,
            "Block",
            ext,
            opts.force,
            templates::BLOCK,
            &self.context(&config.package_blocks, name, opts.gui, tile),
        )?);

        if tile {
            emit(write_source(
                &config.source_root,
                &config.package_tiles,
                name,
                "Tile",
                ext,
                opts.force,
                templates::TILE,
                &self.context(&config.package_tiles, name, opts.gui, tile),
            )?);
        }

        if opts.gui {
            emit(write_source(
                &config.source_root,
                &config.package_containers,
                name,
                "Container",
                ext,
                opts.force,
                templates::CONTAINER,
                &self.context(&config.package_containers, name, opts.gui, tile),
            )?);
            emit(write_source(
                &config.source_root,
                &config.package_screens,
                name,
                "Screen",
                ext,
                opts.force,
                templates::SCREEN,
                &self.context(&config.package_screens, name, opts.gui, tile),
            )?);
        }

        if !opts.skip_json {
            let assets = [
                ("blockstates", templates::BLOCKSTATE_JSON),
                ("models.block", templates::BLOCKMODEL_JSON),
                ("models.item", templates::ITEMMODEL_JSON),
            ];
            for (package, template) in assets {
                emit(write_json(
                    &config.asset_resource_root,
                    package,
                    name,
                    opts.force,
                    template,
                    &self.context(package, name, opts.gui, tile),
                )?);
            }

            let data = [
                ("loot_tables.blocks", templates::LOOTTABLE_JSON),
                ("recipes", templates::RECIPE_JSON),
            ];
            for (package, template) in data {
                emit(write_json(
                    &config.data_resource_root,
                    package,
                    name,
                    opts.force,
                    template,
                    &self.context(package, name, opts.gui, tile),
                )?);
            }
        }

        Ok(outcomes)
    }

    /// Build the render context for one artifact.
    fn context(&self, package: &str, name: &str, gui: bool, tile: bool) -> RenderContext {
        RenderContext::new()
            .input(
                "package",
                format!("{}.{}", self.config.root_package, package),
            )
            .input("modid_ref", self.config.modid_ref.clone())
            .input("modid", self.config.modid.clone())
            .input("name", name)
            .conditional("gui", gui)
            .conditional("tile", tile)
    }
}
