use serde::{Serialize, Serializer};
use std::fmt;

use crate::rules::CategoryKind;

/// A concrete type, rendered in TypeScript syntax.
///
/// `Any` is a deliberately open type. It is never used to mean "no
/// information"; that role belongs to [`TypeInfo::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Any,
    Boolean,
    Number,
    String,
    /// Event handler or callback
    Handler,
    Array,
    /// Generic string-keyed record
    Record,
    /// Anything a date can be built from
    DateLike,
    /// Renderable content
    Node,
    /// Declared type text kept verbatim
    Named(String),
    Nullable(Box<TypeExpr>),
}

impl TypeExpr {
    /// Map TypeScript annotation text to the type information it carries.
    ///
    /// `unknown` is the only annotation that carries no information.
    pub fn from_annotation(text: &str) -> TypeInfo {
        let text = text.trim();
        match text {
            "" | "unknown" => TypeInfo::Unknown,
            "any" => TypeInfo::Known(TypeExpr::Any),
            "boolean" => TypeInfo::Known(TypeExpr::Boolean),
            "number" => TypeInfo::Known(TypeExpr::Number),
            "string" => TypeInfo::Known(TypeExpr::String),
            other => TypeInfo::Known(TypeExpr::Named(other.to_string())),
        }
    }

    pub fn nullable(self) -> Self {
        match self {
            already @ TypeExpr::Nullable(_) => already,
            TypeExpr::Any => TypeExpr::Any,
            other => TypeExpr::Nullable(Box::new(other)),
        }
    }

}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Handler => write!(f, "(...args: any[]) => void | Promise<void>"),
            Self::Array => write!(f, "any[]"),
            Self::Record => write!(f, "Record<string, any>"),
            Self::DateLike => write!(f, "string | number | Date"),
            Self::Node => write!(f, "ReactNode"),
            Self::Named(text) => write!(f, "{text}"),
            Self::Nullable(inner) => match inner.as_ref() {
                // Function types need parentheses inside a union
                TypeExpr::Handler => write!(f, "({inner}) | null"),
                _ => write!(f, "{inner} | null"),
            },
        }
    }
}

impl Serialize for TypeExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Type information for a field: either nothing is known, or a concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeInfo {
    #[default]
    Unknown,
    Known(TypeExpr),
}

impl TypeInfo {
    pub fn is_known(&self) -> bool {
        matches!(self, TypeInfo::Known(_))
    }

    pub fn as_known(&self) -> Option<&TypeExpr> {
        match self {
            TypeInfo::Known(ty) => Some(ty),
            TypeInfo::Unknown => None,
        }
    }
}

/// `Unknown` serializes as `null`, a known type as its text.
impl Serialize for TypeInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypeInfo::Unknown => serializer.serialize_none(),
            TypeInfo::Known(ty) => serializer.serialize_some(ty),
        }
    }
}

impl From<TypeExpr> for TypeInfo {
    fn from(ty: TypeExpr) -> Self {
        TypeInfo::Known(ty)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInfo::Unknown => write!(f, "unknown"),
            TypeInfo::Known(ty) => write!(f, "{ty}"),
        }
    }
}

/// A field as supplied by a caller: its identifier and whatever type is
/// already declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared: TypeInfo,
    pub optional: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared: TypeInfo) -> Self {
        Self {
            name: name.into(),
            declared,
            optional: false,
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, TypeInfo::Unknown)
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Where a resolved type came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The caller's declared type was kept
    Declared,
    /// The type was inferred from the field name
    Inferred,
    /// Nothing was known; the open type was used
    Fallback,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared => write!(f, "declared"),
            Self::Inferred => write!(f, "inferred"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField {
    pub name: String,
    #[serde(rename = "type")]
    pub resolved: TypeExpr,
    pub optional: bool,
    pub source: ResolutionSource,
    pub category: CategoryKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_annotation_primitives() {
        assert_eq!(TypeExpr::from_annotation("unknown"), TypeInfo::Unknown);
        assert_eq!(
            TypeExpr::from_annotation(" number "),
            TypeInfo::Known(TypeExpr::Number)
        );
        assert_eq!(
            TypeExpr::from_annotation("any"),
            TypeInfo::Known(TypeExpr::Any)
        );
        assert_eq!(
            TypeExpr::from_annotation("User | null"),
            TypeInfo::Known(TypeExpr::Named("User | null".to_string()))
        );
    }

    #[test]
    fn test_display_matches_typescript_syntax() {
        assert_eq!(
            TypeExpr::Handler.to_string(),
            "(...args: any[]) => void | Promise<void>"
        );
        assert_eq!(TypeExpr::DateLike.to_string(), "string | number | Date");
        assert_eq!(TypeExpr::Number.nullable().to_string(), "number | null");
        assert_eq!(
            TypeExpr::Handler.nullable().to_string(),
            "((...args: any[]) => void | Promise<void>) | null"
        );
    }

    #[test]
    fn test_nullable_is_idempotent() {
        let once = TypeExpr::String.nullable();
        assert_eq!(once.clone().nullable(), once);
        assert_eq!(TypeExpr::Any.nullable(), TypeExpr::Any);
    }

    #[test]
    fn test_serializes_as_type_text() {
        let json = serde_json::to_string(&TypeExpr::Record).unwrap();
        assert_eq!(json, "\"Record<string, any>\"");
    }

    #[test]
    fn test_type_info_serializes_unknown_as_null() {
        assert_eq!(serde_json::to_string(&TypeInfo::Unknown).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&TypeInfo::Known(TypeExpr::Any)).unwrap(),
            "\"any\""
        );
    }
}
