//! Prompt templates and the renderer that fills their `{{name}}` slots

use crate::error::IntelError;
use std::collections::HashMap;

/// Variable bindings for a render call
pub type Bindings<'a> = HashMap<&'a str, &'a str>;

/// A named, versioned prompt with required variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    name: &'static str,
    version: u32,
    body: &'static str,
    required: &'static [&'static str],
}

impl PromptTemplate {
    /// Create a template
    pub const fn new(
        name: &'static str,
        version: u32,
        body: &'static str,
        required: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            version,
            body,
            required,
        }
    }

    /// Template name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Template version, bumped whenever the wording changes
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Raw template text
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// Variables that must be bound, in declared order
    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    /// Render against the given bindings
    pub fn render(&self, bindings: &Bindings<'_>) -> Result<String, IntelError> {
        render(self.body, bindings, self.required)
    }
}

/// Render `template`, substituting every `{{name}}` slot from `bindings`
///
/// Fails with [`IntelError::MissingVariable`] naming the first entry of
/// `required` that has no binding. Values are inserted verbatim and are not
/// scanned for further slots. Slots with no binding that are not required
/// render as empty text; an unterminated `{{` is kept literally.
pub fn render(
    template: &str,
    bindings: &Bindings<'_>,
    required: &[&str],
) -> Result<String, IntelError> {
    if let Some(missing) = required.iter().find(|name| !bindings.contains_key(*name)) {
        return Err(IntelError::MissingVariable(missing.to_string()));
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                if let Some(value) = bindings.get(name) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    Ok(out)
}

/// Built-in extraction templates
pub mod templates {
    use super::PromptTemplate;

    /// Pulls core company names out of free text
    pub const COMPANY_EXTRACTION: PromptTemplate = PromptTemplate::new(
        "company_extraction",
        1,
        include_str!("../templates/company_extraction.txt"),
        &["text"],
    );

    /// Ranks up to five direct, same-market competitors
    pub const COMPETITORS: PromptTemplate = PromptTemplate::new(
        "competitors",
        1,
        include_str!("../templates/competitors.txt"),
        &["company_name", "company_ticker"],
    );

    /// Lists majority or fully owned subsidiaries
    pub const SUBSIDIARIES: PromptTemplate = PromptTemplate::new(
        "subsidiaries",
        1,
        include_str!("../templates/subsidiaries.txt"),
        &["company_name", "company_ticker"],
    );
}

#[cfg(test)]
mod tests {
    use super::templates::*;
    use super::*;

    fn bindings<'a>(pairs: &[(&'a str, &'a str)]) -> Bindings<'a> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_render_substitutes_slots() {
        let out = render(
            "Name: {{name}}, Ticker: {{ ticker }}",
            &bindings(&[("name", "Apple"), ("ticker", "AAPL")]),
            &["name", "ticker"],
        )
        .unwrap();
        assert_eq!(out, "Name: Apple, Ticker: AAPL");
    }

    #[test]
    fn test_missing_variable_names_first_in_declared_order() {
        let result = render("{{a}} {{b}}", &bindings(&[]), &["b", "a"]);
        match result {
            Err(IntelError::MissingVariable(name)) => assert_eq!(name, "b"),
            other => panic!("Expected MissingVariable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_binding_is_valid() {
        let out = render("[{{text}}]", &bindings(&[("text", "")]), &["text"]).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = render(
            "{{a}}",
            &bindings(&[("a", "{{b}}"), ("b", "nope")]),
            &["a"],
        )
        .unwrap();
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn test_unbound_optional_slot_renders_empty() {
        let out = render("x{{extra}}y", &bindings(&[]), &[]).unwrap();
        assert_eq!(out, "xy");
    }

    #[test]
    fn test_unterminated_slot_kept_literally() {
        let out = render("a {{b", &bindings(&[("b", "B")]), &[]).unwrap();
        assert_eq!(out, "a {{b");
    }

    #[test]
    fn test_repeated_slot() {
        let out = render("{{x}}-{{x}}", &bindings(&[("x", "1")]), &["x"]).unwrap();
        assert_eq!(out, "1-1");
    }

    #[test]
    fn test_builtin_templates_declare_their_slots() {
        for template in [COMPANY_EXTRACTION, COMPETITORS, SUBSIDIARIES] {
            for name in template.required() {
                assert!(
                    template.body().contains(&format!("{{{{{}}}}}", name)),
                    "{} lacks slot {}",
                    template.name(),
                    name
                );
            }
            assert!(template.version() >= 1);
        }
    }

    #[test]
    fn test_company_template_renders_prompt() {
        let out = COMPANY_EXTRACTION
            .render(&bindings(&[("text", "Apple Inc is a technology company")]))
            .unwrap();
        assert!(out.contains("Text: Apple Inc is a technology company"));
        assert!(out.contains("JSON array"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_competitor_template_requires_ticker() {
        let result = COMPETITORS.render(&bindings(&[("company_name", "Alphabet")]));
        assert!(matches!(result, Err(IntelError::MissingVariable(n)) if n == "company_ticker"));
    }

    #[test]
    fn test_competitor_template_policy() {
        let out = COMPETITORS
            .render(&bindings(&[("company_name", "CDSL"), ("company_ticker", "N/A")]))
            .unwrap();
        assert!(out.contains("Name: CDSL"));
        assert!(out.contains("Ticker: N/A"));
        assert!(out.contains("up to 5"));
        assert!(out.contains("customers, clients, partners or distributors"));
    }
}
