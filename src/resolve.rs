//! Type resolution merge.
//!
//! The classifier is a fallback, never an authority: a declared type that
//! carries information always wins over a name-based guess.

use crate::classifier::classify;
use crate::core::{FieldDescriptor, ResolutionSource, ResolvedField, TypeExpr, TypeInfo};
use crate::rules::RuleTable;

/// Merge a name-implied type with a declared type.
///
/// 1. A known declared type wins outright.
/// 2. Otherwise a known implied type wins.
/// 3. Otherwise the result is the open type.
pub fn resolve(implied: &TypeInfo, declared: &TypeInfo) -> TypeExpr {
    resolve_with_source(implied, declared).0
}

fn resolve_with_source(implied: &TypeInfo, declared: &TypeInfo) -> (TypeExpr, ResolutionSource) {
    match (declared, implied) {
        (TypeInfo::Known(ty), _) => (ty.clone(), ResolutionSource::Declared),
        (TypeInfo::Unknown, TypeInfo::Known(ty)) => (ty.clone(), ResolutionSource::Inferred),
        (TypeInfo::Unknown, TypeInfo::Unknown) => (TypeExpr::Any, ResolutionSource::Fallback),
    }
}

pub fn resolve_field(field: &FieldDescriptor, table: &RuleTable) -> ResolvedField {
    let classification = classify(&field.name, table);
    let (resolved, source) = resolve_with_source(&classification.implied, &field.declared);

    if let (ResolutionSource::Declared, Some(implied)) =
        (source, classification.implied.as_known())
    {
        if *implied != resolved {
            log::debug!(
                "{}: keeping declared `{}` over name-implied `{}`",
                field.name,
                resolved,
                implied
            );
        }
    }

    ResolvedField {
        name: field.name.clone(),
        resolved,
        optional: field.optional,
        source,
        category: classification.category,
    }
}

/// Resolve every field, keeping input order.
pub fn resolve_fields(fields: &[FieldDescriptor], table: &RuleTable) -> Vec<ResolvedField> {
    fields
        .iter()
        .map(|field| resolve_field(field, table))
        .collect()
}
