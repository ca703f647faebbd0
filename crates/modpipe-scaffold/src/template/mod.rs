//! Sigil template language: parsing and rendering.
//!
//! Templates mix literal text with `${name}` / `$U{name}` / `$L{name}`
//! placeholders and line-level region markers `?{cond` / `?}cond`.
//! Parsing produces an ordered element list; rendering evaluates that
//! list against inputs and conditionals, so the template shape can be
//! tested independently of substitution.

pub mod parser;
pub mod render;

pub use parser::{CaseTransform, ParsedTemplate, TemplateElement};
pub use render::{render, render_str, RenderContext};
