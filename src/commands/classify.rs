use anyhow::Result;
use colored::*;
use std::io::Write;

use crate::classifier::classify;
use crate::core::{TypeExpr, TypeInfo};
use crate::resolve::resolve;
use crate::rules::RuleTable;

pub struct ClassifyConfig {
    pub identifiers: Vec<String>,
    /// Declared type applied to every identifier
    pub declared: Option<String>,
    pub explain: bool,
}

pub fn classify_identifiers<W: Write>(
    config: &ClassifyConfig,
    table: &RuleTable,
    out: &mut W,
) -> Result<()> {
    let declared = config
        .declared
        .as_deref()
        .map_or(TypeInfo::Unknown, TypeExpr::from_annotation);
    let width = config
        .identifiers
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0);

    for identifier in &config.identifiers {
        let classification = classify(identifier, table);
        let resolved = resolve(&classification.implied, &declared);
        let category = if classification.is_fallback() {
            classification.category.to_string().yellow()
        } else {
            classification.category.to_string().green()
        };

        write!(
            out,
            "{:<width$}  {:<8}  {}",
            identifier,
            category,
            resolved,
            width = width
        )?;
        if config.explain {
            write!(out, "  ({})", explain(&classification.matched_by, &declared))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn explain(matched_by: &crate::rules::MatchKind, declared: &TypeInfo) -> String {
    match declared {
        TypeInfo::Known(ty) => format!("declared `{ty}` kept; name matched {matched_by}"),
        TypeInfo::Unknown => format!("matched {matched_by}"),
    }
}
