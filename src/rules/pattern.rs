//! Structural name tests used by categories.
//!
//! All literals are case-sensitive. Prefix and suffix forms only match on a
//! camelCase word boundary: `itemCount` ends with the word `Count`, while
//! `discount` merely ends with the letters `count` and is not a match.

use serde::Serialize;
use std::fmt;

/// How an identifier was accepted by a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "word", rename_all = "snake_case")]
pub enum MatchKind {
    /// Listed verbatim in the category's exact names
    Exact,
    /// Prefix word followed by a capitalized remainder
    Prefix(String),
    /// Root word verbatim, or a capitalized root ending a compound name
    Suffix(String),
    /// One of a closed set of literal names
    Literal(String),
    /// No category matched
    Fallback,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact name"),
            Self::Prefix(word) => write!(f, "prefix `{word}`"),
            Self::Suffix(word) => write!(f, "suffix `{word}`"),
            Self::Literal(word) => write!(f, "literal `{word}`"),
            Self::Fallback => write!(f, "no rule matched"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    /// `count` or `<prefix>Count`
    SuffixRoot(Vec<String>),
    /// `is<Remainder>`
    Prefix(Vec<String>),
    /// Exactly `<prefix><suffix>`, e.g. `createdAt`
    PrefixedLiteral {
        prefixes: Vec<String>,
        suffix: String,
    },
    /// `icon` or `Icon`
    CapitalizedWord(Vec<String>),
    /// Accepts everything
    Any,
}

impl NamePattern {
    pub fn suffix_roots(roots: &[&str]) -> Self {
        Self::SuffixRoot(to_owned(roots))
    }

    pub fn prefixes(prefixes: &[&str]) -> Self {
        Self::Prefix(to_owned(prefixes))
    }

    pub fn prefixed_literal(prefixes: &[&str], suffix: &str) -> Self {
        Self::PrefixedLiteral {
            prefixes: to_owned(prefixes),
            suffix: suffix.to_string(),
        }
    }

    pub fn capitalized_words(words: &[&str]) -> Self {
        Self::CapitalizedWord(to_owned(words))
    }

    /// Test an identifier, reporting which word made it match.
    pub fn test(&self, identifier: &str) -> Option<MatchKind> {
        match self {
            Self::SuffixRoot(roots) => roots
                .iter()
                .find(|root| matches_suffix_root(identifier, root))
                .map(|root| MatchKind::Suffix(root.clone())),
            Self::Prefix(prefixes) => prefixes
                .iter()
                .find(|prefix| matches_prefix(identifier, prefix))
                .map(|prefix| MatchKind::Prefix(prefix.clone())),
            Self::PrefixedLiteral { prefixes, suffix } => prefixes
                .iter()
                .find(|prefix| {
                    identifier
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest == suffix.as_str())
                })
                .map(|prefix| MatchKind::Literal(format!("{prefix}{suffix}"))),
            Self::CapitalizedWord(words) => words
                .iter()
                .find(|word| identifier == word.as_str() || identifier == capitalize(word))
                .map(|word| MatchKind::Literal(word.clone())),
            Self::Any => Some(MatchKind::Fallback),
        }
    }

    /// Extend this pattern's word list in place. Returns false when the
    /// pattern has no list of that shape.
    pub(crate) fn extend_words(&mut self, extra: &[String]) -> bool {
        match self {
            Self::SuffixRoot(words) | Self::Prefix(words) | Self::CapitalizedWord(words) => {
                for word in extra {
                    if !words.contains(word) {
                        words.push(word.clone());
                    }
                }
                true
            }
            Self::PrefixedLiteral { .. } | Self::Any => false,
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuffixRoot(roots) => {
                let forms: Vec<String> = roots
                    .iter()
                    .map(|root| format!("{root}|*{}", capitalize(root)))
                    .collect();
                write!(f, "suffix {}", forms.join(", "))
            }
            Self::Prefix(prefixes) => {
                let forms: Vec<String> = prefixes.iter().map(|p| format!("{p}*")).collect();
                write!(f, "prefix {}", forms.join(", "))
            }
            Self::PrefixedLiteral { prefixes, suffix } => {
                let forms: Vec<String> = prefixes.iter().map(|p| format!("{p}{suffix}")).collect();
                write!(f, "literal {}", forms.join(", "))
            }
            Self::CapitalizedWord(words) => {
                let forms: Vec<String> = words
                    .iter()
                    .map(|w| format!("{w}|{}", capitalize(w)))
                    .collect();
                write!(f, "word {}", forms.join(", "))
            }
            Self::Any => write!(f, "any name"),
        }
    }
}

/// `count` matches `count` and `itemCount`, never `Count` or `discount`.
pub fn matches_suffix_root(identifier: &str, root: &str) -> bool {
    if identifier == root {
        return true;
    }
    let capitalized = capitalize(root);
    identifier.len() > capitalized.len() && identifier.ends_with(capitalized.as_str())
}

/// `is` matches `isVisible`, never `is`, `island` or `is_visible`.
pub fn matches_prefix(identifier: &str, prefix: &str) -> bool {
    identifier
        .strip_prefix(prefix)
        .is_some_and(starts_with_uppercase)
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn starts_with_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_requires_word_boundary() {
        assert!(matches_suffix_root("itemCount", "count"));
        assert!(matches_suffix_root("count", "count"));
        assert!(!matches_suffix_root("discount", "count"));
        assert!(!matches_suffix_root("Count", "count"));
        assert!(!matches_suffix_root("itemcount", "count"));
    }

    #[test]
    fn test_suffix_with_uppercase_root() {
        assert!(matches_suffix_root("userID", "ID"));
        assert!(matches_suffix_root("ID", "ID"));
        assert!(matches_suffix_root("buttonClassName", "className"));
    }

    #[test]
    fn test_prefix_requires_capitalized_remainder() {
        assert!(matches_prefix("isVisible", "is"));
        assert!(!matches_prefix("is", "is"));
        assert!(!matches_prefix("island", "is"));
        assert!(!matches_prefix("is_visible", "is"));
        assert!(!matches_prefix("IsVisible", "is"));
    }

    #[test]
    fn test_prefixed_literal_is_closed() {
        let pattern = NamePattern::prefixed_literal(&["created", "updated"], "At");
        assert_eq!(
            pattern.test("createdAt"),
            Some(MatchKind::Literal("createdAt".to_string()))
        );
        assert_eq!(pattern.test("lastSeenAt"), None);
        assert_eq!(pattern.test("createdAtUtc"), None);
    }

    #[test]
    fn test_capitalized_word() {
        let pattern = NamePattern::capitalized_words(&["icon"]);
        assert!(pattern.test("icon").is_some());
        assert!(pattern.test("Icon").is_some());
        assert!(pattern.test("ICON").is_none());
    }

    #[test]
    fn test_extend_words_skips_duplicates() {
        let mut pattern = NamePattern::prefixes(&["is"]);
        assert!(pattern.extend_words(&["is".to_string(), "was".to_string()]));
        assert_eq!(pattern, NamePattern::prefixes(&["is", "was"]));
        assert!(!NamePattern::Any.extend_words(&["x".to_string()]));
    }

    #[test]
    fn test_display_lists_forms() {
        let pattern = NamePattern::suffix_roots(&["count"]);
        assert_eq!(pattern.to_string(), "suffix count|*Count");
    }
}
