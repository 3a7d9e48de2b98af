//! Type resolution merge: declared types always beat name-based guesses.

use pretty_assertions::assert_eq;
use propinfer::{
    classify, resolve, resolve_fields, CategoryKind, FieldDescriptor, ResolutionSource, RuleTable,
    TypeExpr, TypeInfo,
};
use proptest::prelude::*;

fn known(ty: TypeExpr) -> TypeInfo {
    TypeInfo::Known(ty)
}

#[test]
fn test_known_declared_wins() {
    assert_eq!(
        resolve(&known(TypeExpr::String), &known(TypeExpr::Number)),
        TypeExpr::Number
    );
}

#[test]
fn test_implied_used_when_nothing_declared() {
    let implied = classify("isVisible", RuleTable::prop_keys()).implied;
    assert_eq!(resolve(&implied, &TypeInfo::Unknown), TypeExpr::Boolean);
}

#[test]
fn test_double_unknown_is_open() {
    let implied = classify("xyz123", RuleTable::prop_keys()).implied;
    assert_eq!(resolve(&implied, &TypeInfo::Unknown), TypeExpr::Any);
}

#[test]
fn test_declared_any_is_information() {
    // A deliberate `any` is kept; only the sentinel defers to the name
    assert_eq!(
        resolve(&known(TypeExpr::Boolean), &known(TypeExpr::Any)),
        TypeExpr::Any
    );
}

#[test]
fn test_resolve_fields_keeps_names_and_order() {
    let fields = vec![
        FieldDescriptor::untyped("onSubmit"),
        FieldDescriptor::new("title", known(TypeExpr::Named("ReactNode".to_string()))),
        FieldDescriptor::untyped("itemCount").optional(),
        FieldDescriptor::untyped("xyz123"),
    ];
    let resolved = resolve_fields(&fields, RuleTable::prop_keys());

    let names: Vec<&str> = resolved.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["onSubmit", "title", "itemCount", "xyz123"]);

    assert_eq!(resolved[0].resolved, TypeExpr::Handler);
    assert_eq!(resolved[0].source, ResolutionSource::Inferred);
    assert_eq!(
        resolved[1].resolved,
        TypeExpr::Named("ReactNode".to_string())
    );
    assert_eq!(resolved[1].source, ResolutionSource::Declared);
    assert_eq!(resolved[1].category, CategoryKind::String);
    assert_eq!(resolved[2].resolved, TypeExpr::Number);
    assert!(resolved[2].optional);
    assert_eq!(resolved[3].resolved, TypeExpr::Any);
    assert_eq!(resolved[3].source, ResolutionSource::Fallback);
}

fn type_expr() -> impl Strategy<Value = TypeExpr> {
    let leaf = prop_oneof![
        Just(TypeExpr::Any),
        Just(TypeExpr::Boolean),
        Just(TypeExpr::Number),
        Just(TypeExpr::String),
        Just(TypeExpr::Handler),
        Just(TypeExpr::Array),
        Just(TypeExpr::Record),
        Just(TypeExpr::DateLike),
        Just(TypeExpr::Node),
        "[A-Z][a-zA-Z]{0,10}".prop_map(TypeExpr::Named),
    ];
    leaf.prop_flat_map(|ty| prop_oneof![Just(ty.clone()), Just(ty.nullable())])
}

fn type_info() -> impl Strategy<Value = TypeInfo> {
    prop_oneof![Just(TypeInfo::Unknown), type_expr().prop_map(TypeInfo::Known)]
}

proptest! {
    #[test]
    fn prop_known_declared_always_wins(implied in type_info(), declared in type_expr()) {
        prop_assert_eq!(resolve(&implied, &TypeInfo::Known(declared.clone())), declared);
    }

    #[test]
    fn prop_implied_fills_missing_declaration(implied in type_expr()) {
        prop_assert_eq!(resolve(&TypeInfo::Known(implied.clone()), &TypeInfo::Unknown), implied);
    }

    #[test]
    fn prop_resolution_is_pure(implied in type_info(), declared in type_info()) {
        prop_assert_eq!(resolve(&implied, &declared), resolve(&implied, &declared));
    }
}
