//! String predicates used for the distinguished category and preferred rooms.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A simple string match.
///
/// Serialized externally tagged, e.g. `{ prefix = "G-" }` in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Prefix(String),
    Exact(String),
    Contains(String),
}

impl Pattern {
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Prefix(prefix) => value.starts_with(prefix.as_str()),
            Self::Exact(exact) => value == exact,
            Self::Contains(needle) => value.contains(needle.as_str()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(prefix) => write!(f, "prefix '{prefix}'"),
            Self::Exact(exact) => write!(f, "exact '{exact}'"),
            Self::Contains(needle) => write!(f, "contains '{needle}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Pattern;

    #[rstest]
    #[case(Pattern::Prefix("G".into()), "G-102", true)]
    #[case(Pattern::Prefix("G".into()), "AG-102", false)]
    #[case(Pattern::Exact("Hall".into()), "Hall", true)]
    #[case(Pattern::Exact("Hall".into()), "Hall 2", false)]
    #[case(Pattern::Contains("amph".into()), "G-amphitheatre", true)]
    #[case(Pattern::Contains("amph".into()), "G-102", false)]
    fn matches_cases(#[case] pattern: Pattern, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(pattern.matches(value), expected);
    }

    #[test]
    fn deserializes_tagged_form() {
        let pattern: Pattern = serde_json::from_str(r#"{"prefix":"Architecture"}"#)
            .expect("pattern should parse");
        assert_eq!(pattern, Pattern::Prefix("Architecture".into()));
        assert_eq!(pattern.to_string(), "prefix 'Architecture'");
    }
}
