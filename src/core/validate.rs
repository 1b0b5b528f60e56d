use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Standalone segment values that signal a version or placeholder rather
/// than a meaningful name component. Fixed at compile time, never mutated.
pub const BAD_VERSION_TOKENS: &[&str] = &[
    "v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8", "v9", "v10", "final", "latest", "new", "old",
    "release", "rev",
];

fn charset_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("invalid charset pattern"))
}

fn version_token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^v\d+$").expect("invalid version token pattern"))
}

/// Verdict for one candidate name. `ok` is true exactly when `errors` is
/// empty.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<String>,
}

/// Check a candidate repository name against the naming policy.
///
/// Every rule runs unconditionally and appends its own message, so the
/// caller can show the user all problems at once instead of one per
/// attempt. Note that a segment like "v1" fires both the token-set rule and
/// the `v<digits>` pattern rule, yielding two messages for one segment.
pub fn validate_repo_name(name: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if !charset_pattern().is_match(name) {
        errors.push("Use only lowercase letters, numbers, and hyphens.".to_string());
    }

    // Safety net independent of the charset rule
    if name
        .chars()
        .any(|c| c.is_ascii_uppercase() || c == '_' || c == ' ')
    {
        errors.push("No uppercase, underscores, or spaces.".to_string());
    }

    if name.contains("--") {
        errors.push("No double hyphens.".to_string());
    }

    if name.starts_with('-') || name.ends_with('-') {
        errors.push("No leading/trailing hyphen.".to_string());
    }

    let segments: Vec<&str> = name.split('-').filter(|s| !s.is_empty()).collect();

    if segments.len() < 2 {
        errors.push("Use at least two segments, e.g., {project}-{description}.".to_string());
    }

    for segment in &segments {
        if BAD_VERSION_TOKENS.contains(segment) {
            errors.push(format!(
                "Avoid versioning/placeholder token: \"{}\".",
                segment
            ));
        }
        if version_token_pattern().is_match(segment) {
            errors.push(format!("Avoid version token: \"{}\".", segment));
        }
    }

    ValidationResult {
        ok: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_names() {
        for name in [
            "my-app",
            "website-frontend",
            "ecom-order-api",
            "data-analytics-module",
            "a1-b2-c3",
        ] {
            let result = validate_repo_name(name);
            assert!(result.ok, "{:?} rejected: {:?}", name, result.errors);
            assert!(result.errors.is_empty());
        }
    }

    #[test]
    fn rejects_uppercase_with_both_charset_and_safety_messages() {
        let result = validate_repo_name("MyApp");
        assert!(!result.ok);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("lowercase letters")));
        assert!(result
            .errors
            .iter()
            .any(|e| e == "No uppercase, underscores, or spaces."));
    }

    #[test]
    fn rejects_underscore() {
        let result = validate_repo_name("my_app");
        assert!(!result.ok);
        assert!(result
            .errors
            .contains(&"No uppercase, underscores, or spaces.".to_string()));
    }

    #[test]
    fn rejects_double_hyphen() {
        let result = validate_repo_name("my--app");
        assert!(!result.ok);
        assert!(result.errors.contains(&"No double hyphens.".to_string()));
    }

    #[test]
    fn rejects_edge_hyphens() {
        for name in ["-my-app", "my-app-"] {
            let result = validate_repo_name(name);
            assert!(!result.ok, "{:?} accepted", name);
            assert!(result
                .errors
                .contains(&"No leading/trailing hyphen.".to_string()));
        }
    }

    #[test]
    fn rejects_single_segment() {
        let result = validate_repo_name("myapp");
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec!["Use at least two segments, e.g., {project}-{description}.".to_string()]
        );
    }

    #[test]
    fn rejects_version_tokens() {
        let result = validate_repo_name("my-app-final");
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec!["Avoid versioning/placeholder token: \"final\".".to_string()]
        );
    }

    #[test]
    fn v1_fires_both_token_rules() {
        let result = validate_repo_name("my-app-v1");
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec![
                "Avoid versioning/placeholder token: \"v1\".".to_string(),
                "Avoid version token: \"v1\".".to_string(),
            ]
        );
    }

    #[test]
    fn v_digits_outside_the_fixed_set_still_fires_pattern_rule() {
        let result = validate_repo_name("my-app-v42");
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec!["Avoid version token: \"v42\".".to_string()]
        );
    }

    #[test]
    fn version_like_but_not_version_tokens_pass() {
        // "v1a" and "2v" match neither the set nor ^v\d+$
        assert!(validate_repo_name("tool-v1a").ok);
        assert!(validate_repo_name("tool-2v").ok);
    }

    #[test]
    fn empty_string_fails_closed() {
        let result = validate_repo_name("");
        assert!(!result.ok);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("lowercase letters")));
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("at least two segments")));
    }

    #[test]
    fn all_violations_accumulate_in_one_pass() {
        let result = validate_repo_name("-My__app--v1-");
        assert!(!result.ok);
        // charset, safety net, double hyphen, edge hyphen, bad token x2
        assert!(result.errors.len() >= 5, "got {:?}", result.errors);
    }

    #[test]
    fn ok_iff_errors_empty() {
        for name in ["my-app", "MyApp", "", "a-b-v1", "solo"] {
            let result = validate_repo_name(name);
            assert_eq!(result.ok, result.errors.is_empty());
        }
    }
}
