//! Classifier behaviour over the shipped rule tables.

use propinfer::{classify, CategoryKind, MatchKind, RuleTable, TypeExpr, TypeInfo};
use proptest::prelude::*;

fn category(identifier: &str, table: &RuleTable) -> CategoryKind {
    classify(identifier, table).category
}

#[test]
fn test_handler_checked_before_object() {
    // `onDataLoad` ends with `Data`-like words but the handler prefix wins
    for table in [RuleTable::prop_keys(), RuleTable::props()] {
        let result = classify("onDataLoad", table);
        assert_eq!(result.category, CategoryKind::Handler);
        assert_eq!(result.matched_by, MatchKind::Prefix("on".to_string()));
        assert_eq!(result.implied, TypeInfo::Known(TypeExpr::Handler));
    }
}

#[test]
fn test_data_alone_is_object() {
    assert_eq!(
        category("userData", RuleTable::prop_keys()),
        CategoryKind::Object
    );
}

#[test]
fn test_number_suffix_requires_word_boundary() {
    let table = RuleTable::prop_keys();
    assert_eq!(category("itemCount", table), CategoryKind::Number);
    assert_eq!(category("count", table), CategoryKind::Number);
    assert_ne!(category("discount", table), CategoryKind::Number);
    assert_ne!(category("Count", table), CategoryKind::Number);
}

#[test]
fn test_boolean_prefixes_and_names() {
    let table = RuleTable::prop_keys();
    assert_eq!(category("isVisible", table), CategoryKind::Boolean);
    assert_eq!(category("hasError", table), CategoryKind::Boolean);
    assert_eq!(category("disabled", table), CategoryKind::Boolean);
    // lowercase remainder is not a word boundary
    assert_ne!(category("island", table), CategoryKind::Boolean);
}

#[test]
fn test_date_forms() {
    let table = RuleTable::prop_keys();
    assert_eq!(category("createdAt", table), CategoryKind::Date);
    assert_eq!(category("startDate", table), CategoryKind::Date);
    assert_eq!(category("lastLoginTime", table), CategoryKind::Date);
    assert_eq!(
        classify("updatedAt", table).implied,
        TypeInfo::Known(TypeExpr::DateLike)
    );
}

#[test]
fn test_arrays_and_strings() {
    let table = RuleTable::prop_keys();
    assert_eq!(category("items", table), CategoryKind::Array);
    assert_eq!(category("selectedItems", table), CategoryKind::Array);
    assert_eq!(category("userId", table), CategoryKind::String);
    assert_eq!(category("pageTitle", table), CategoryKind::String);
}

#[test]
fn test_unknown_fallback() {
    let result = classify("xyz123", RuleTable::prop_keys());
    assert!(result.is_fallback());
    assert_eq!(result.matched_by, MatchKind::Fallback);
    assert_eq!(result.implied, TypeInfo::Unknown);
    assert_eq!(result.suggested_type(), TypeExpr::Any);
}

#[test]
fn test_node_category_only_in_props_table() {
    assert_eq!(category("children", RuleTable::props()), CategoryKind::Node);
    assert_ne!(
        category("children", RuleTable::prop_keys()),
        CategoryKind::Node
    );
    assert_eq!(category("headerIcon", RuleTable::props()), CategoryKind::Node);
}

#[test]
fn test_priority_positions() {
    let props = RuleTable::props();
    assert!(props.priority_of(CategoryKind::Node) < props.priority_of(CategoryKind::Boolean));
    assert!(props.priority_of(CategoryKind::Handler) < props.priority_of(CategoryKind::Object));
    assert_eq!(RuleTable::prop_keys().priority_of(CategoryKind::Node), None);
}

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-zA-Z0-9]{0,20}",
        "(on|is|has|set|handle)[A-Z][a-z]{1,8}",
        "[a-z]{1,8}(Count|Size|Date|Items|Id|Config|Icon)",
        "\\PC{0,12}",
    ]
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(id in identifier()) {
        for table in [RuleTable::prop_keys(), RuleTable::props()] {
            prop_assert_eq!(classify(&id, table), classify(&id, table));
        }
    }

    #[test]
    fn prop_every_identifier_gets_a_category(id in identifier()) {
        for table in [RuleTable::prop_keys(), RuleTable::props()] {
            let result = classify(&id, table);
            prop_assert!(table.priority_of(result.category).is_some());
            prop_assert_eq!(result.is_fallback(), result.implied == TypeInfo::Unknown);
        }
    }

    #[test]
    fn prop_earliest_accepting_category_wins(id in identifier()) {
        let table = RuleTable::props();
        let result = classify(&id, table);
        let first = table
            .categories()
            .find(|c| c.accepts(&id).is_some())
            .map(|c| c.kind);
        prop_assert_eq!(first, Some(result.category));
    }

    #[test]
    fn prop_lowercase_count_suffix_is_not_number(stem in "[a-z]{1,6}") {
        let id = format!("{stem}count");
        let table = RuleTable::prop_keys();
        let number = table.category(CategoryKind::Number).unwrap();
        prop_assert!(number.accepts(&id).is_none());
    }
}
