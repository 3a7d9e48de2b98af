//! Project configuration from `.propinfer.toml`.
//!
//! ```toml
//! table = "props"
//! treat_any_as_unknown = true
//!
//! [categories.boolean]
//! exact = ["active"]
//! prefixes = ["was"]
//! ```

mod loader;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::rules::{CategoryKind, CategoryOverrides, RuleTable, TableVariant};
use crate::translate::TranslateOptions;

pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropinferConfig {
    /// Rule table used when the command line does not pick one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableVariant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treat_any_as_unknown: Option<bool>,

    /// Extra names per category
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<CategoryKind, CategoryOverrides>,
}

impl PropinferConfig {
    /// The table variant to use, with a command line choice taking precedence.
    pub fn table_variant(&self, cli_choice: Option<TableVariant>) -> TableVariant {
        cli_choice.or(self.table).unwrap_or_default()
    }

    /// Build the rule table for `variant` with this config's overrides.
    pub fn rule_table(&self, variant: TableVariant) -> RuleTable {
        if self.categories.values().all(CategoryOverrides::is_empty) {
            return RuleTable::shipped(variant).clone();
        }
        RuleTable::build(variant).with_overrides(&self.categories)
    }

    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            treat_any_as_unknown: self
                .treat_any_as_unknown
                .unwrap_or(TranslateOptions::default().treat_any_as_unknown),
        }
    }
}

/// Written by `propinfer init`.
pub const DEFAULT_CONFIG: &str = r#"# propinfer configuration

# Rule table: "prop-keys" (default) or "props" (adds the renderable node category)
table = "prop-keys"

# Treat a declared `any` as "no information" so names can refine it
treat_any_as_unknown = true

# Extend a category with project-specific names.
# Keys: handler, node, boolean, array, number, object, date, string
#
# [categories.boolean]
# exact = ["active"]
# prefixes = ["was"]
#
# [categories.number]
# roots = ["ratio"]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.table, Some(TableVariant::PropKeys));
        assert_eq!(config.treat_any_as_unknown, Some(true));
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_cli_choice_wins() {
        let config = PropinferConfig {
            table: Some(TableVariant::Props),
            ..Default::default()
        };
        assert_eq!(config.table_variant(None), TableVariant::Props);
        assert_eq!(
            config.table_variant(Some(TableVariant::PropKeys)),
            TableVariant::PropKeys
        );
        assert_eq!(
            PropinferConfig::default().table_variant(None),
            TableVariant::PropKeys
        );
    }

    #[test]
    fn test_overrides_reach_the_classifier() {
        let config = parse_config(
            r#"
            [categories.number]
            roots = ["ratio"]
            "#,
        )
        .unwrap();
        let table = config.rule_table(TableVariant::PropKeys);
        assert_eq!(
            classify("aspectRatio", &table).category,
            CategoryKind::Number
        );
        assert_eq!(
            classify("aspectRatio", RuleTable::prop_keys()).category,
            CategoryKind::Unknown
        );
    }
}
