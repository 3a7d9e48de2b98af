//! Declared types from runtime `PropTypes` declarations.
//!
//! A validator without `.isRequired` may be missing or null, so the field
//! becomes optional and its type nullable.

use tree_sitter::Node;

use super::parser::{named_children, node_text, property_name};
use crate::core::{FieldDescriptor, TypeExpr, TypeInfo};

const PROP_TYPES_PREFIX: &str = "PropTypes.";
const REQUIRED_SUFFIX: &str = ".isRequired";

/// Fields of an object literal whose values are `PropTypes` validators.
/// Returns `None` when no value is a `PropTypes` validator.
pub(crate) fn prop_types_fields(object: &Node, source: &str) -> Option<Vec<FieldDescriptor>> {
    if object.kind() != "object" {
        return None;
    }

    let mut saw_validator = false;
    let mut fields = Vec::new();
    for pair in named_children(object) {
        if pair.kind() != "pair" {
            if pair.kind() == "spread_element" {
                log::debug!(
                    "Skipping spread `{}` in PropTypes object",
                    node_text(&pair, source)
                );
            }
            continue;
        }
        let (Some(key), Some(value)) = (
            pair.child_by_field_name("key"),
            pair.child_by_field_name("value"),
        ) else {
            continue;
        };

        let name = property_name(&key, source);
        match parse_validator(node_text(&value, source)) {
            Some(validator) => {
                saw_validator = true;
                fields.push(validator.named(name));
            }
            // Custom validator functions carry no type information
            None => fields.push(FieldDescriptor::untyped(name).optional()),
        }
    }

    saw_validator.then_some(fields)
}

/// A parsed validator, before it is attached to a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    pub declared: TypeInfo,
    pub required: bool,
}

impl Validator {
    fn named(self, name: String) -> FieldDescriptor {
        let declared = match (self.required, self.declared) {
            (false, TypeInfo::Known(ty)) => TypeInfo::Known(ty.nullable()),
            (_, declared) => declared,
        };
        FieldDescriptor {
            name,
            declared,
            optional: !self.required,
        }
    }
}

/// Parse validator text such as `PropTypes.arrayOf(PropTypes.string).isRequired`.
pub fn parse_validator(text: &str) -> Option<Validator> {
    let compact: String = text.split_whitespace().collect();
    let rest = compact.strip_prefix(PROP_TYPES_PREFIX)?;

    let (rest, required) = match rest.strip_suffix(REQUIRED_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (rest, false),
    };
    let name_end = rest.find(['(', '.']).unwrap_or(rest.len());
    let (name, args) = rest.split_at(name_end);

    let ty = match name {
        "string" => Some(TypeExpr::String),
        "number" => Some(TypeExpr::Number),
        "bool" => Some(TypeExpr::Boolean),
        "func" => Some(TypeExpr::Handler),
        "array" | "arrayOf" => Some(TypeExpr::Array),
        "object" | "objectOf" | "shape" | "exact" => Some(TypeExpr::Record),
        "node" | "element" | "elementType" => Some(TypeExpr::Node),
        "symbol" => Some(TypeExpr::Named("symbol".to_string())),
        "any" => Some(TypeExpr::Any),
        "instanceOf" => call_argument(args).map(|class| TypeExpr::Named(class.to_string())),
        // oneOf, oneOfType and anything unrecognised
        _ => None,
    };

    Some(Validator {
        declared: ty.map_or(TypeInfo::Unknown, TypeInfo::Known),
        required,
    })
}

fn call_argument(args: &str) -> Option<&str> {
    let inner = args.strip_prefix('(')?.strip_suffix(')')?;
    (!inner.is_empty()).then_some(inner)
}
