//! Template model and built-in defaults.

use serde::{Deserialize, Serialize};

/// Literal placeholder token substituted by the expander. Treated as an
/// opaque marker, not a parsed variable syntax.
pub const PLACEHOLDER: &str = "[url]";

/// A named URL template. The pattern may contain zero or more occurrences of
/// the placeholder token; a pattern without it expands to itself unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub pattern: String,
}

impl Template {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Preview endpoint pattern shipped as a default. The code parameter is
/// already percent-encoded; the expander never encodes anything itself.
const PREVIEW_PATTERN: &str = "[url]/preview?code=import%20SwiftUI%0A%0Astruct%20ContentView%3A%20View%20%7B%0A%20%20%20%20var%20body%3A%20some%20View%20%7B%0A%20%20%20%20%20%20%20%20Text(%22Hello!%22)%0A%20%20%20%20%7D%0A%7D&device=iPhone%2016%20Pro";

/// Built-in template set used whenever no persisted file is usable.
pub fn default_templates() -> Vec<Template> {
    vec![
        Template::new("Health Check", "[url]/health"),
        Template::new("Run Preview", PREVIEW_PATTERN),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_health_check_and_run_preview() {
        let defaults = default_templates();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].name, "Health Check");
        assert_eq!(defaults[0].pattern, "[url]/health");
        assert_eq!(defaults[1].name, "Run Preview");
        assert!(defaults[1].pattern.starts_with("[url]/preview?code="));
    }

    #[test]
    fn default_patterns_contain_placeholder() {
        for t in default_templates() {
            assert!(t.pattern.contains(PLACEHOLDER), "{} lacks token", t.name);
        }
    }

    #[test]
    fn template_json_shape() {
        let t = Template::new("Ping", "[url]/ping");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"name":"Ping","pattern":"[url]/ping"}"#);
    }
}
