use serde::{Deserialize, Serialize};

use crate::slug::to_kebab;

/// The bag of naming inputs a caller has collected. Fields are raw user
/// text in arbitrary case and punctuation; nothing is validated here.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamingIntent {
    /// Used verbatim (after normalization) when set; all other fields are
    /// ignored.
    pub raw: Option<String>,
    /// Prepended to whichever base the pattern rules produce.
    pub prefix: Option<String>,
    pub project: Option<String>,
    pub description: Option<String>,
    pub service: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub team: Option<String>,
    pub component: Option<String>,
}

fn filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

/// One composition pattern: a presence test plus the ordered fields it
/// joins. Rules are tried top to bottom and the first match wins, so adding
/// a pattern is a one-line change here.
struct PatternRule {
    applies: fn(&NamingIntent) -> bool,
    parts: fn(&NamingIntent) -> Vec<&str>,
}

fn present_parts<'a>(fields: &[&'a Option<String>]) -> Vec<&'a str> {
    fields
        .iter()
        .filter_map(|f| f.as_deref())
        .filter(|s| !s.is_empty())
        .collect()
}

static PATTERN_RULES: &[PatternRule] = &[
    // Raw override: short-circuits composition entirely
    PatternRule {
        applies: |i| filled(&i.raw),
        parts: |i| present_parts(&[&i.raw]),
    },
    // Component pattern: {team}-{component}
    PatternRule {
        applies: |i| filled(&i.team) || filled(&i.component),
        parts: |i| present_parts(&[&i.team, &i.component]),
    },
    // Service pattern: {project}-{service}-{type}
    PatternRule {
        applies: |i| filled(&i.service) || filled(&i.kind),
        parts: |i| present_parts(&[&i.project, &i.service, &i.kind]),
    },
    // General pattern: {project}-{description}
    PatternRule {
        applies: |_| true,
        parts: |i| present_parts(&[&i.project, &i.description]),
    },
];

/// Build a canonical repository name from a [`NamingIntent`].
///
/// Never fails: an intent with no usable fields produces an empty string,
/// which [`validate_repo_name`](crate::validate::validate_repo_name) then
/// rejects. Rejection is the validator's job, not the builder's.
pub fn build_repo_name(intent: &NamingIntent) -> String {
    let rule = PATTERN_RULES
        .iter()
        .find(|r| (r.applies)(intent))
        .unwrap_or(&PATTERN_RULES[PATTERN_RULES.len() - 1]);

    let base = to_kebab(&(rule.parts)(intent).join("-"));

    match intent.prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => to_kebab(&format!("{}-{}", prefix, base)),
        _ => base,
    }
}
