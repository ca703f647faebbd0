//! Scaffolding generator for new mod blocks.
//!
//! Renders a fixed set of source and JSON resource templates for a new
//! block type and writes each result under the configured project tree,
//! skipping files that already exist unless forced.

pub mod config;
pub mod error;
pub mod generator;
pub mod template;
pub mod templates;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::{ScaffoldError, ScaffoldResult};
pub use generator::{BlockGenerator, BlockOptions};
pub use template::{
    render, render_str, CaseTransform, ParsedTemplate, RenderContext, TemplateElement,
};
pub use writer::WriteOutcome;
