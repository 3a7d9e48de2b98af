//! Props of function components.
//!
//! A component is a function declaration, or a variable bound to an arrow
//! function, function expression or a wrapper call such as `memo(...)`,
//! whose name starts with an uppercase letter.

use tree_sitter::Node;

use super::declarations::{annotation_parts, first_type_argument, type_parts, PropsPart};
use super::parser::{named_children, node_text, property_name};
use crate::core::FieldDescriptor;

const FUNCTION_KINDS: &[&str] = &["arrow_function", "function_expression", "function"];

/// Annotation types that carry component props as their first argument.
const COMPONENT_TYPES: &[&str] = &["FC", "FunctionComponent", "VFC"];

pub(crate) fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Props of `function Button(props: ButtonProps) {}`.
pub(crate) fn function_props(func: &Node, source: &str) -> Option<(String, Vec<PropsPart>)> {
    let name = node_text(&func.child_by_field_name("name")?, source);
    if !is_component_name(name) {
        return None;
    }
    Some((name.to_string(), parameter_props(func, source)))
}

/// Props of `const Button = (props: ButtonProps) => ...` and friends.
/// Returns `None` when the declarator is not a component at all.
pub(crate) fn declarator_props(
    declarator: &Node,
    source: &str,
) -> Option<(String, Vec<PropsPart>)> {
    let name_node = declarator.child_by_field_name("name")?;
    if name_node.kind() != "identifier" {
        return None;
    }
    let name = node_text(&name_node, source);
    if !is_component_name(name) {
        return None;
    }
    let function = component_function(&declarator.child_by_field_name("value")?)?;

    let annotated = declarator
        .child_by_field_name("type")
        .map(|annotation| component_annotation_props(&annotation, source))
        .unwrap_or_default();
    let props = if annotated.is_empty() {
        parameter_props(&function, source)
    } else {
        annotated
    };
    Some((name.to_string(), props))
}

/// The function behind a declarator value, looking through wrapper calls.
fn component_function<'t>(value: &Node<'t>) -> Option<Node<'t>> {
    if FUNCTION_KINDS.contains(&value.kind()) {
        return Some(*value);
    }
    if value.kind() == "call_expression" {
        let arguments = value.child_by_field_name("arguments")?;
        return named_children(&arguments)
            .into_iter()
            .find_map(|arg| component_function(&arg));
    }
    None
}

/// `: React.FC<Props>` gives `Props`.
fn component_annotation_props(annotation: &Node, source: &str) -> Vec<PropsPart> {
    let Some(ty) = named_children(annotation).into_iter().next() else {
        return Vec::new();
    };
    if ty.kind() != "generic_type" {
        return Vec::new();
    }
    let is_component_type = ty
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))
        .and_then(|name| name.rsplit('.').next())
        .is_some_and(|base| COMPONENT_TYPES.contains(&base));
    if !is_component_type {
        return Vec::new();
    }
    first_type_argument(&ty)
        .map(|arg| type_parts(&arg, source))
        .unwrap_or_default()
}

/// Props described by the first parameter of a function node.
fn parameter_props(function: &Node, source: &str) -> Vec<PropsPart> {
    // `props => ...` has a single untyped identifier parameter
    let Some(parameters) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let Some(first) = named_children(&parameters).into_iter().next() else {
        return Vec::new();
    };

    match first.kind() {
        "required_parameter" | "optional_parameter" => {
            if let Some(annotation) = first.child_by_field_name("type") {
                return annotation_parts(&annotation, source);
            }
            first
                .child_by_field_name("pattern")
                .map(|pattern| pattern_props(&pattern, source))
                .unwrap_or_default()
        }
        _ => pattern_props(&first, source),
    }
}

fn pattern_props(pattern: &Node, source: &str) -> Vec<PropsPart> {
    match pattern.kind() {
        "object_pattern" => vec![PropsPart::Fields(destructured_fields(pattern, source))],
        "assignment_pattern" => pattern
            .child_by_field_name("left")
            .map(|left| pattern_props(&left, source))
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// `({ title, count = 0, label: text, ...rest })`: nothing is declared,
/// and a default value makes the field optional.
fn destructured_fields(pattern: &Node, source: &str) -> Vec<FieldDescriptor> {
    named_children(pattern)
        .iter()
        .filter_map(|element| match element.kind() {
            "shorthand_property_identifier_pattern" => {
                Some(FieldDescriptor::untyped(node_text(element, source)))
            }
            "object_assignment_pattern" => element
                .child_by_field_name("left")
                .map(|left| FieldDescriptor::untyped(node_text(&left, source)).optional()),
            "pair_pattern" => {
                let key = element.child_by_field_name("key")?;
                let has_default = element
                    .child_by_field_name("value")
                    .is_some_and(|value| value.kind() == "assignment_pattern");
                let field = FieldDescriptor::untyped(property_name(&key, source));
                Some(if has_default { field.optional() } else { field })
            }
            _ => None,
        })
        .collect()
}
