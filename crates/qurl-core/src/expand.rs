//! URL expansion: pure placeholder substitution over a template set.

use thiserror::Error;

use crate::template::{Template, PLACEHOLDER};

/// Error returned by [`expand`]. An empty source URL is a caller mistake and
/// must be reported; an empty template set is not (it yields zero results).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("no source URL provided")]
    EmptySourceUrl,
}

/// One expansion result: the template's name and the URL generated from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUrl {
    pub name: String,
    pub url: String,
}

/// Expands every template against `source_url` by replacing all occurrences
/// of `token` in each pattern, verbatim. No encoding, validation, or network
/// access; patterns are expected to already carry any percent-encoding.
///
/// Templates with an empty name or empty pattern are skipped. Output order
/// follows the input slice.
pub fn expand(
    source_url: &str,
    templates: &[Template],
    token: &str,
) -> Result<Vec<GeneratedUrl>, ExpandError> {
    if source_url.is_empty() {
        return Err(ExpandError::EmptySourceUrl);
    }

    Ok(templates
        .iter()
        .filter(|t| !t.name.is_empty() && !t.pattern.is_empty())
        .map(|t| GeneratedUrl {
            name: t.name.clone(),
            url: t.pattern.replace(token, source_url),
        })
        .collect())
}

/// Token auto-detection from the original form-based shell: a source that
/// still contains `[` and `]` is treated as the placeholder expression itself,
/// so expanding with it is an identity-style rewrite of matching patterns.
///
/// The CLI always passes the fixed [`PLACEHOLDER`]; this is kept for callers
/// that want the form variant's behavior.
pub fn resolve_token(source_url: &str) -> &str {
    if source_url.contains('[') && source_url.contains(']') {
        source_url
    } else {
        PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::default_templates;

    fn tpl(name: &str, pattern: &str) -> Template {
        Template::new(name, pattern)
    }

    #[test]
    fn substitutes_token() {
        let templates = [tpl("Health Check", "[url]/health")];
        let out = expand("https://abc.trycloudflare.com", &templates, PLACEHOLDER).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Health Check");
        assert_eq!(out[0].url, "https://abc.trycloudflare.com/health");
    }

    #[test]
    fn replaces_every_occurrence() {
        let templates = [tpl("Echo", "[url]/redirect?next=[url]/done")];
        let out = expand("https://x.test", &templates, PLACEHOLDER).unwrap();
        assert_eq!(out[0].url, "https://x.test/redirect?next=https://x.test/done");
        assert_eq!(out[0].url.matches("https://x.test").count(), 2);
        assert!(!out[0].url.contains(PLACEHOLDER));
    }

    #[test]
    fn pattern_without_token_is_unchanged() {
        let templates = [tpl("Static", "https://docs.example.com/guide")];
        let out = expand("https://x.test", &templates, PLACEHOLDER).unwrap();
        assert_eq!(out[0].url, "https://docs.example.com/guide");
    }

    #[test]
    fn empty_source_is_an_error() {
        let templates = default_templates();
        assert_eq!(
            expand("", &templates, PLACEHOLDER),
            Err(ExpandError::EmptySourceUrl)
        );
    }

    #[test]
    fn empty_template_set_yields_no_results() {
        let out = expand("https://x.test", &[], PLACEHOLDER).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn skips_templates_with_empty_name_or_pattern() {
        let templates = [
            tpl("", "[url]/skipped"),
            tpl("Blank", ""),
            tpl("Kept", "[url]/kept"),
        ];
        let out = expand("https://x.test", &templates, PLACEHOLDER).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Kept");
    }

    #[test]
    fn output_order_follows_input_order() {
        let templates = [tpl("B", "[url]/b"), tpl("A", "[url]/a")];
        let out = expand("https://x.test", &templates, PLACEHOLDER).unwrap();
        let names: Vec<_> = out.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn expansion_is_idempotent_across_calls() {
        let templates = default_templates();
        let first = expand("https://x.test", &templates, PLACEHOLDER).unwrap();
        let second = expand("https://x.test", &templates, PLACEHOLDER).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_token_uses_source_when_bracketed() {
        assert_eq!(resolve_token("[your-tunnel-url]"), "[your-tunnel-url]");
        assert_eq!(resolve_token("https://x.test/[id]"), "https://x.test/[id]");
    }

    #[test]
    fn resolve_token_defaults_for_plain_urls() {
        assert_eq!(resolve_token("https://x.test"), PLACEHOLDER);
        assert_eq!(resolve_token(""), PLACEHOLDER);
    }
}
