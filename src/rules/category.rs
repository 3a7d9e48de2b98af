use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::pattern::{MatchKind, NamePattern};
use crate::core::{TypeExpr, TypeInfo};

/// Named classification buckets for field identifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Handler,
    /// Renderable content such as `children` or `icon`
    Node,
    Boolean,
    Array,
    Number,
    Object,
    Date,
    String,
    Unknown,
}

impl CategoryKind {
    /// The type every identifier in this category is assumed to have.
    pub fn implied_type(self) -> TypeInfo {
        let ty = match self {
            Self::Handler => TypeExpr::Handler,
            Self::Node => TypeExpr::Node,
            Self::Boolean => TypeExpr::Boolean,
            Self::Array => TypeExpr::Array,
            Self::Number => TypeExpr::Number,
            Self::Object => TypeExpr::Record,
            Self::Date => TypeExpr::DateLike,
            Self::String => TypeExpr::String,
            Self::Unknown => return TypeInfo::Unknown,
        };
        TypeInfo::Known(ty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Handler => "handler",
            Self::Node => "node",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Number => "number",
            Self::Object => "object",
            Self::Date => "date",
            Self::String => "string",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category: exact names plus structural patterns, tested in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub kind: CategoryKind,
    pub exact: BTreeSet<String>,
    pub patterns: Vec<NamePattern>,
}

impl Category {
    pub fn new(kind: CategoryKind) -> Self {
        Self {
            kind,
            exact: BTreeSet::new(),
            patterns: Vec::new(),
        }
    }

    /// The terminal category that accepts every identifier.
    pub fn unknown() -> Self {
        Self::new(CategoryKind::Unknown).with_pattern(NamePattern::Any)
    }

    pub fn with_exact(mut self, names: &[&str]) -> Self {
        self.exact.extend(names.iter().map(|n| (*n).to_string()));
        self
    }

    pub fn with_pattern(mut self, pattern: NamePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn implied(&self) -> TypeInfo {
        self.kind.implied_type()
    }

    /// Exact names are checked before patterns.
    pub fn accepts(&self, identifier: &str) -> Option<MatchKind> {
        if self.exact.contains(identifier) {
            return Some(MatchKind::Exact);
        }
        self.patterns
            .iter()
            .find_map(|pattern| pattern.test(identifier))
    }

    pub(crate) fn extend_exact(&mut self, names: &[String]) {
        self.exact.extend(names.iter().cloned());
    }

    /// Add words to the first pattern of the same shape, or append a new one.
    pub(crate) fn extend_pattern(&mut self, template: NamePattern, words: &[String]) {
        if words.is_empty() {
            return;
        }
        let same_shape = self
            .patterns
            .iter_mut()
            .find(|p| std::mem::discriminant(&**p) == std::mem::discriminant(&template));
        match same_shape {
            Some(pattern) => {
                pattern.extend_words(words);
            }
            None => {
                let mut pattern = template;
                pattern.extend_words(words);
                self.patterns.push(pattern);
            }
        }
    }
}
