//! Renderer for parsed sigil templates.

use std::collections::{HashMap, HashSet};

use crate::template::parser::{ParsedTemplate, TemplateElement};

/// Inputs and conditionals for one render.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    inputs: HashMap<String, String>,
    conditionals: HashMap<String, bool>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named input value.
    pub fn input(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }

    /// Add a named boolean condition.
    pub fn conditional(mut self, name: impl Into<String>, value: bool) -> Self {
        self.conditionals.insert(name.into(), value);
        self
    }

    fn input_value(&self, name: &str) -> Option<&str> {
        self.inputs.get(name).map(String::as_str)
    }

    fn condition_value(&self, name: &str) -> Option<bool> {
        self.conditionals.get(name).copied()
    }
}

/// Render a parsed template against a context.
///
/// Region content is dropped while any condition known to be false is
/// open; marker lines themselves never appear in the output. Conditions
/// absent from the context are ignored, so their regions are always kept.
/// A placeholder without a matching input is re-emitted literally. The
/// result is trimmed of leading and trailing whitespace.
pub fn render(template: &ParsedTemplate, ctx: &RenderContext) -> String {
    let mut out = String::new();
    let mut suppressed: HashSet<&str> = HashSet::new();

    for element in &template.elements {
        match element {
            TemplateElement::RegionOpen(cond) => {
                if ctx.condition_value(cond) == Some(false) {
                    suppressed.insert(cond.as_str());
                }
            }
            TemplateElement::RegionClose(cond) => {
                suppressed.remove(cond.as_str());
            }
            TemplateElement::Text(text) => {
                if suppressed.is_empty() {
                    out.push_str(text);
                }
            }
            TemplateElement::Placeholder { name, transform } => {
                if !suppressed.is_empty() {
                    continue;
                }
                match ctx.input_value(name) {
                    // Substituted values are emitted as-is, never re-expanded
                    Some(value) => out.push_str(&transform.apply(value)),
                    None => {
                        out.push_str(transform.sigil());
                        out.push_str(name);
                        out.push('}');
                    }
                }
            }
        }
    }

    out.trim().to_string()
}

/// Parse and render template text in one step.
pub fn render_str(template: &str, ctx: &RenderContext) -> String {
    render(&ParsedTemplate::parse(template), ctx)
}
