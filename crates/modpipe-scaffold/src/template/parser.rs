//! Sigil template parser
//!
//! Produces a flat, ordered list of template elements. Region markers are
//! recognized at line granularity: a line whose trimmed content is exactly
//! `?{<cond>` opens a region, `?}<cond>` closes it. Placeholders are
//! recognized inline. Parsing is lenient and infallible; an unterminated
//! placeholder is kept as literal text.

/// Case transformation applied to a placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// `${name}` - substitute the value verbatim
    Verbatim,
    /// `$U{name}` - substitute the upper-cased value
    Upper,
    /// `$L{name}` - substitute the lower-cased value
    Lower,
}

impl CaseTransform {
    /// Apply the transformation to a value.
    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseTransform::Verbatim => input.to_string(),
            CaseTransform::Upper => input.to_uppercase(),
            CaseTransform::Lower => input.to_lowercase(),
        }
    }

    /// The opening sigil that introduces this transform in template text.
    pub(crate) fn sigil(&self) -> &'static str {
        match self {
            CaseTransform::Verbatim => "${",
            CaseTransform::Upper => "$U{",
            CaseTransform::Lower => "$L{",
        }
    }
}

/// One parsed template element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateElement {
    /// Literal text, may span lines
    Text(String),
    /// Placeholder token with its case transform
    Placeholder {
        /// Input name referenced by the token
        name: String,
        /// Case transform encoded by the sigil
        transform: CaseTransform,
    },
    /// Opening region marker line for a named condition
    RegionOpen(String),
    /// Closing region marker line for a named condition
    RegionClose(String),
}

/// Parsed template: an ordered element list.
///
/// Marker lines are consumed by the parser (including their line break)
/// and never appear as text.
#[derive(Debug, Clone, Default)]
pub struct ParsedTemplate {
    /// Elements in source order
    pub elements: Vec<TemplateElement>,
}

impl ParsedTemplate {
    /// Parse template text into an element list.
    pub fn parse(template: &str) -> Self {
        let mut elements = Vec::new();
        let lines: Vec<&str> = template.split('\n').collect();
        let last = lines.len().saturating_sub(1);

        for (index, raw_line) in lines.iter().enumerate() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let trimmed = line.trim();

            if let Some(cond) = trimmed.strip_prefix("?{") {
                elements.push(TemplateElement::RegionOpen(cond.to_string()));
                continue;
            }
            if let Some(cond) = trimmed.strip_prefix("?}") {
                elements.push(TemplateElement::RegionClose(cond.to_string()));
                continue;
            }

            parse_line(line, &mut elements);
            if index != last {
                push_text(&mut elements, "\n");
            }
        }

        Self { elements }
    }

    /// All condition names referenced by region markers, in source order.
    pub fn condition_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for element in &self.elements {
            if let TemplateElement::RegionOpen(cond) = element {
                if !names.contains(&cond.as_str()) {
                    names.push(cond.as_str());
                }
            }
        }
        names
    }

    /// All placeholder names in source order, deduplicated.
    pub fn placeholder_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for element in &self.elements {
            if let TemplateElement::Placeholder { name, .. } = element {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }
}

/// Parse one content line into text and placeholder elements.
fn parse_line(line: &str, elements: &mut Vec<TemplateElement>) {
    let mut rest = line;

    while !rest.is_empty() {
        match find_sigil(rest) {
            Some((start, transform)) => {
                let after_sigil = start + transform.sigil().len();
                match rest[after_sigil..].find('}') {
                    Some(close) => {
                        if start > 0 {
                            push_text(elements, &rest[..start]);
                        }
                        elements.push(TemplateElement::Placeholder {
                            name: rest[after_sigil..after_sigil + close].to_string(),
                            transform,
                        });
                        rest = &rest[after_sigil + close + 1..];
                    }
                    None => {
                        // Unterminated token stays literal
                        push_text(elements, rest);
                        rest = "";
                    }
                }
            }
            None => {
                push_text(elements, rest);
                rest = "";
            }
        }
    }
}

/// Find the earliest placeholder sigil in `text`.
fn find_sigil(text: &str) -> Option<(usize, CaseTransform)> {
    let candidates = [
        CaseTransform::Verbatim,
        CaseTransform::Upper,
        CaseTransform::Lower,
    ];

    candidates
        .iter()
        .filter_map(|t| text.find(t.sigil()).map(|pos| (pos, *t)))
        .min_by_key(|(pos, _)| *pos)
}

/// Append text, merging into a preceding `Text` element when possible.
fn push_text(elements: &mut Vec<TemplateElement>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(TemplateElement::Text(existing)) = elements.last_mut() {
        existing.push_str(text);
    } else {
        elements.push(TemplateElement::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let parsed = ParsedTemplate::parse("hello world");
        assert_eq!(
            parsed.elements,
            vec![TemplateElement::Text("hello world".to_string())]
        );
    }

    #[test]
    fn test_parse_verbatim_placeholder() {
        let parsed = ParsedTemplate::parse("class ${name}Block");
        assert_eq!(
            parsed.elements,
            vec![
                TemplateElement::Text("class ".to_string()),
                TemplateElement::Placeholder {
                    name: "name".to_string(),
                    transform: CaseTransform::Verbatim,
                },
                TemplateElement::Text("Block".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_upper_and_lower_placeholders() {
        let parsed = ParsedTemplate::parse("$U{name} $L{name}");
        assert_eq!(
            parsed.elements,
            vec![
                TemplateElement::Placeholder {
                    name: "name".to_string(),
                    transform: CaseTransform::Upper,
                },
                TemplateElement::Text(" ".to_string()),
                TemplateElement::Placeholder {
                    name: "name".to_string(),
                    transform: CaseTransform::Lower,
                },
            ]
        );
    }

    #[test]
    fn test_parse_region_markers() {
        let parsed = ParsedTemplate::parse("a\n?{gui\nb\n?}gui\nc");
        assert_eq!(
            parsed.elements,
            vec![
                TemplateElement::Text("a\n".to_string()),
                TemplateElement::RegionOpen("gui".to_string()),
                TemplateElement::Text("b\n".to_string()),
                TemplateElement::RegionClose("gui".to_string()),
                TemplateElement::Text("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_marker_lines_may_be_indented() {
        let parsed = ParsedTemplate::parse("    ?{tile\nx\n    ?}tile");
        assert_eq!(parsed.condition_names(), vec!["tile"]);
    }

    #[test]
    fn test_unterminated_placeholder_is_literal() {
        let parsed = ParsedTemplate::parse("broken ${name");
        assert_eq!(
            parsed.elements,
            vec![TemplateElement::Text("broken ${name".to_string())]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = ParsedTemplate::parse("a\r\n?{gui\r\nb\r\n?}gui\r\n");
        assert_eq!(parsed.condition_names(), vec!["gui"]);
    }

    #[test]
    fn test_placeholder_names_deduplicated() {
        let parsed = ParsedTemplate::parse("${name} $U{name} ${modid}");
        assert_eq!(parsed.placeholder_names(), vec!["name", "modid"]);
    }

    #[test]
    fn test_case_transform_apply() {
        assert_eq!(CaseTransform::Verbatim.apply("MyBlock"), "MyBlock");
        assert_eq!(CaseTransform::Upper.apply("MyBlock"), "MYBLOCK");
        assert_eq!(CaseTransform::Lower.apply("MyBlock"), "myblock");
    }
}
