use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::{Category, CategoryKind};
use super::pattern::NamePattern;
use super::seeds;

/// The shipped rule table configurations.
///
/// The priority order of each variant is fixed; an identifier that matches
/// several categories always takes the earliest one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TableVariant {
    /// handler, boolean, array, number, object, date, string, unknown
    #[default]
    PropKeys,
    /// handler, node, boolean, array, number, object, date, string, unknown
    Props,
}

impl TableVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PropKeys => "prop-keys",
            Self::Props => "props",
        }
    }
}

impl fmt::Display for TableVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project-specific additions to one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryOverrides {
    /// Names accepted verbatim
    pub exact: Vec<String>,
    /// Roots accepted verbatim or as a capitalized suffix
    pub roots: Vec<String>,
    /// Prefixes followed by a capitalized remainder
    pub prefixes: Vec<String>,
}

impl CategoryOverrides {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.roots.is_empty() && self.prefixes.is_empty()
    }
}

static PROP_KEYS_TABLE: Lazy<RuleTable> = Lazy::new(|| RuleTable::build(TableVariant::PropKeys));
static PROPS_TABLE: Lazy<RuleTable> = Lazy::new(|| RuleTable::build(TableVariant::Props));

/// An ordered, immutable list of categories ending with the Unknown fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    variant: TableVariant,
    categories: Vec<Category>,
    fallback: Category,
}

impl RuleTable {
    /// Build a table from categories in priority order. Any Unknown
    /// category passed in is dropped; the fallback always comes last.
    pub fn new(variant: TableVariant, categories: Vec<Category>) -> Self {
        let categories = categories
            .into_iter()
            .filter(|c| c.kind != CategoryKind::Unknown)
            .collect();
        Self {
            variant,
            categories,
            fallback: Category::unknown(),
        }
    }

    /// Build a fresh, owned copy of a shipped table.
    pub fn build(variant: TableVariant) -> Self {
        let categories = match variant {
            TableVariant::PropKeys => vec![
                seeds::handler(),
                seeds::boolean(),
                seeds::array(),
                seeds::number(),
                seeds::object(),
                seeds::date(),
                seeds::string(),
            ],
            TableVariant::Props => vec![
                seeds::handler(),
                seeds::node(),
                seeds::boolean(),
                seeds::array(),
                seeds::number(),
                seeds::object(),
                seeds::date(),
                seeds::string(),
            ],
        };
        Self::new(variant, categories)
    }

    /// Shared instance of a shipped table.
    pub fn shipped(variant: TableVariant) -> &'static RuleTable {
        match variant {
            TableVariant::PropKeys => &PROP_KEYS_TABLE,
            TableVariant::Props => &PROPS_TABLE,
        }
    }

    pub fn prop_keys() -> &'static RuleTable {
        Self::shipped(TableVariant::PropKeys)
    }

    pub fn props() -> &'static RuleTable {
        Self::shipped(TableVariant::Props)
    }

    pub fn variant(&self) -> TableVariant {
        self.variant
    }

    /// Categories in priority order, Unknown last.
    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.iter().chain(std::iter::once(&self.fallback))
    }

    pub fn category(&self, kind: CategoryKind) -> Option<&Category> {
        self.categories().find(|c| c.kind == kind)
    }

    pub fn fallback(&self) -> &Category {
        &self.fallback
    }

    /// Zero-based priority of a category, if the table has it.
    pub fn priority_of(&self, kind: CategoryKind) -> Option<usize> {
        self.categories().position(|c| c.kind == kind)
    }

    /// Apply project-specific additions. The priority order is unchanged.
    pub fn with_overrides(mut self, overrides: &BTreeMap<CategoryKind, CategoryOverrides>) -> Self {
        for (kind, additions) in overrides {
            if additions.is_empty() {
                continue;
            }
            if *kind == CategoryKind::Unknown {
                log::warn!("Ignoring overrides for the `unknown` category; it matches every name");
                continue;
            }
            let Some(category) = self.categories.iter_mut().find(|c| c.kind == *kind) else {
                log::warn!(
                    "Ignoring overrides for `{}`: the {} table has no such category",
                    kind,
                    self.variant
                );
                continue;
            };

            category.extend_exact(&additions.exact);
            category.extend_pattern(NamePattern::SuffixRoot(Vec::new()), &additions.roots);
            category.extend_pattern(NamePattern::Prefix(Vec::new()), &additions.prefixes);
            log::debug!(
                "Extended `{}` with {} exact names, {} roots, {} prefixes",
                kind,
                additions.exact.len(),
                additions.roots.len(),
                additions.prefixes.len()
            );
        }
        self
    }
}
