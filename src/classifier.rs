//! Naming-convention classifier.
//!
//! Walks a [`RuleTable`] in priority order and returns the first category
//! that accepts an identifier. Table order is the only tie-break, and the
//! terminal Unknown category guarantees a decision for every identifier.

use serde::Serialize;

use crate::core::{TypeExpr, TypeInfo};
use crate::rules::{Category, CategoryKind, MatchKind, RuleTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub identifier: String,
    pub category: CategoryKind,
    pub matched_by: MatchKind,
    /// `Unknown` when only the fallback matched
    pub implied: TypeInfo,
}

impl Classification {
    /// The implied type, with the open type standing in for "no information".
    pub fn suggested_type(&self) -> TypeExpr {
        self.implied.as_known().cloned().unwrap_or(TypeExpr::Any)
    }

    pub fn is_fallback(&self) -> bool {
        self.category == CategoryKind::Unknown
    }
}

/// Find the category an identifier belongs to.
pub fn classify_category<'t>(identifier: &str, table: &'t RuleTable) -> (&'t Category, MatchKind) {
    table
        .categories()
        .find_map(|category| category.accepts(identifier).map(|how| (category, how)))
        .unwrap_or((table.fallback(), MatchKind::Fallback))
}

pub fn classify(identifier: &str, table: &RuleTable) -> Classification {
    let (category, matched_by) = classify_category(identifier, table);
    log::trace!(
        "{} -> {} ({}, {} table)",
        identifier,
        category.kind,
        matched_by,
        table.variant()
    );

    Classification {
        identifier: identifier.to_string(),
        category: category.kind,
        matched_by,
        implied: category.implied(),
    }
}
