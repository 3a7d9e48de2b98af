//! Seed word lists for the shipped categories.
//!
//! These are heuristics, not a contract. Extend them per project through
//! the `[categories.*]` sections of `.propinfer.toml`.

use super::category::{Category, CategoryKind};
use super::pattern::NamePattern;

pub const HANDLER_PREFIXES: &[&str] = &[
    "on", "handle", "set", "get", "toggle", "reset", "clear", "update", "delete", "create",
    "save", "load", "fetch", "submit", "cancel", "close", "open",
];

pub const HANDLER_NAMES: &[&str] = &[
    "onClick", "onChange", "onSubmit", "onReset", "onClear", "onUpdate", "onDelete", "onCreate",
    "onSave", "onLoad", "onFetch",
];

pub const BOOLEAN_PREFIXES: &[&str] = &[
    "is", "has", "does", "are", "will", "can", "should", "did", "do", "show", "hide",
];

pub const BOOLEAN_NAMES: &[&str] = &[
    "disabled",
    "checked",
    "required",
    "readonly",
    "readOnly",
    "selected",
    "open",
    "loading",
    "hidden",
    "focused",
    "focusedOn",
    "focusedWithin",
    "focusedVisible",
    "focusedInvisible",
    "focusedIn",
    "focusedOut",
];

pub const ARRAY_ROOTS: &[&str] = &[
    "list", "items", "array", "collection", "values", "keys", "entries",
];

pub const NUMBER_ROOTS: &[&str] = &[
    "count", "size", "width", "height", "index", "length", "page", "limit", "offset", "duration",
    "timeout", "delay", "amount", "price", "value", "number", "quantity", "total", "max", "min",
];

pub const OBJECT_ROOTS: &[&str] = &[
    "config", "options", "settings", "data", "info", "meta", "context", "state", "status",
];

pub const DATE_ROOTS: &[&str] = &["date", "time", "timestamp"];

pub const DATE_NAMES: &[&str] = &[
    "startDate",
    "endDate",
    "startTime",
    "endTime",
    "birthday",
    "birthDate",
    "dueDate",
    "releaseDate",
];

/// Combined with the literal `At`: `createdAt`, `updatedAt`, ...
pub const DATE_AT_PREFIXES: &[&str] = &["created", "updated", "deleted", "published", "expires"];

pub const STRING_ROOTS: &[&str] = &[
    "id",
    "ID",
    "key",
    "name",
    "title",
    "label",
    "text",
    "message",
    "url",
    "URL",
    "href",
    "path",
    "type",
    "class",
    "className",
    "src",
    "alt",
    "placeholder",
    "content",
    "description",
    "color",
    "mode",
    "theme",
];

pub const NODE_WORDS: &[&str] = &[
    "icon", "header", "footer", "content", "render", "component", "element", "overlay", "trigger",
    "tooltip", "badge", "avatar", "image", "logo",
];

/// Node words that also mark compound names such as `headerIcon`.
pub const NODE_ROOTS: &[&str] = &[
    "icon", "element", "component", "overlay", "tooltip", "badge", "avatar", "logo",
];

pub fn handler() -> Category {
    Category::new(CategoryKind::Handler)
        .with_exact(HANDLER_NAMES)
        .with_pattern(NamePattern::prefixes(HANDLER_PREFIXES))
}

pub fn node() -> Category {
    Category::new(CategoryKind::Node)
        .with_exact(&["children"])
        .with_pattern(NamePattern::capitalized_words(NODE_WORDS))
        .with_pattern(NamePattern::suffix_roots(NODE_ROOTS))
}

pub fn boolean() -> Category {
    Category::new(CategoryKind::Boolean)
        .with_exact(BOOLEAN_NAMES)
        .with_pattern(NamePattern::prefixes(BOOLEAN_PREFIXES))
}

pub fn array() -> Category {
    Category::new(CategoryKind::Array).with_pattern(NamePattern::suffix_roots(ARRAY_ROOTS))
}

pub fn number() -> Category {
    Category::new(CategoryKind::Number).with_pattern(NamePattern::suffix_roots(NUMBER_ROOTS))
}

pub fn object() -> Category {
    Category::new(CategoryKind::Object).with_pattern(NamePattern::suffix_roots(OBJECT_ROOTS))
}

pub fn date() -> Category {
    Category::new(CategoryKind::Date)
        .with_exact(DATE_NAMES)
        .with_pattern(NamePattern::suffix_roots(DATE_ROOTS))
        .with_pattern(NamePattern::prefixed_literal(DATE_AT_PREFIXES, "At"))
}

pub fn string() -> Category {
    Category::new(CategoryKind::String).with_pattern(NamePattern::suffix_roots(STRING_ROOTS))
}
