//! Field lists from TypeScript type syntax: interfaces, aliases and the
//! object, intersection and generic types that appear in props positions.

use tree_sitter::Node;

use super::parser::{has_token, named_children, node_text, property_name};
use crate::core::{FieldDescriptor, TypeExpr, TypeInfo};

/// One piece of a props type. References are resolved against the
/// interfaces and aliases of the same file once the whole file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PropsPart {
    Fields(Vec<FieldDescriptor>),
    Reference(String),
}

impl PropsPart {
    pub(crate) fn is_inline(&self) -> bool {
        matches!(self, PropsPart::Fields(_))
    }
}

/// Generic wrappers whose first type argument is the real props type.
const TRANSPARENT_WRAPPERS: &[&str] = &["Readonly", "PropsWithChildren"];

pub(crate) fn interface_parts(node: &Node, source: &str) -> Option<(String, Vec<PropsPart>)> {
    let name = node_text(&node.child_by_field_name("name")?, source).to_string();
    let mut parts = Vec::new();

    for child in named_children(node) {
        if child.kind() == "extends_type_clause" {
            for base in named_children(&child) {
                parts.extend(type_parts(&base, source));
            }
        }
    }
    if let Some(body) = node.child_by_field_name("body") {
        parts.push(PropsPart::Fields(member_fields(&body, source)));
    }
    Some((name, parts))
}

pub(crate) fn alias_parts(node: &Node, source: &str) -> Option<(String, Vec<PropsPart>)> {
    let name = node_text(&node.child_by_field_name("name")?, source).to_string();
    let value = node.child_by_field_name("value")?;
    Some((name, type_parts(&value, source)))
}

/// Parts of a `type_annotation` node (`: Props`).
pub(crate) fn annotation_parts(annotation: &Node, source: &str) -> Vec<PropsPart> {
    match named_children(annotation).first() {
        Some(ty) => type_parts(ty, source),
        None => Vec::new(),
    }
}

pub(crate) fn type_parts(ty: &Node, source: &str) -> Vec<PropsPart> {
    match ty.kind() {
        "object_type" => vec![PropsPart::Fields(member_fields(ty, source))],
        "type_identifier" | "nested_type_identifier" => {
            vec![PropsPart::Reference(node_text(ty, source).to_string())]
        }
        "intersection_type" | "parenthesized_type" => named_children(ty)
            .iter()
            .flat_map(|part| type_parts(part, source))
            .collect(),
        "generic_type" => generic_parts(ty, source),
        _ => Vec::new(),
    }
}

fn generic_parts(ty: &Node, source: &str) -> Vec<PropsPart> {
    let Some(name_node) = ty.child_by_field_name("name") else {
        return Vec::new();
    };
    let full_name = node_text(&name_node, source);
    let base = full_name.rsplit('.').next().unwrap_or(full_name);

    if !TRANSPARENT_WRAPPERS.contains(&base) {
        return vec![PropsPart::Reference(full_name.to_string())];
    }

    let mut parts: Vec<PropsPart> = first_type_argument(ty)
        .map(|inner| type_parts(&inner, source))
        .unwrap_or_default();
    if base == "PropsWithChildren" {
        parts.push(PropsPart::Fields(vec![FieldDescriptor::new(
            "children",
            TypeInfo::Known(TypeExpr::Node),
        )
        .optional()]));
    }
    parts
}

/// First argument of `Name<Arg, ...>`.
pub(crate) fn first_type_argument<'t>(generic: &Node<'t>) -> Option<Node<'t>> {
    let arguments = generic
        .child_by_field_name("type_arguments")
        .or_else(|| {
            named_children(generic)
                .into_iter()
                .find(|c| c.kind() == "type_arguments")
        })?;
    named_children(&arguments).into_iter().next()
}

/// Fields declared in an `object_type` or `interface_body`.
pub(crate) fn member_fields(body: &Node, source: &str) -> Vec<FieldDescriptor> {
    named_children(body)
        .iter()
        .filter_map(|member| member_field(member, source))
        .collect()
}

fn member_field(member: &Node, source: &str) -> Option<FieldDescriptor> {
    let declared = match member.kind() {
        "property_signature" => member
            .child_by_field_name("type")
            .map(|annotation| annotation_type(&annotation, source))
            .unwrap_or(TypeInfo::Unknown),
        "method_signature" => TypeInfo::Known(method_type(member, source)),
        _ => return None,
    };
    let name = property_name(&member.child_by_field_name("name")?, source);

    Some(FieldDescriptor {
        name,
        declared,
        optional: has_token(member, "?"),
    })
}

fn annotation_type(annotation: &Node, source: &str) -> TypeInfo {
    match named_children(annotation).first() {
        Some(ty) => TypeExpr::from_annotation(node_text(ty, source)),
        None => TypeInfo::Unknown,
    }
}

/// `onSelect(id: string): void` becomes `(id: string) => void`.
fn method_type(member: &Node, source: &str) -> TypeExpr {
    let params = member
        .child_by_field_name("parameters")
        .map(|p| node_text(&p, source).to_string())
        .unwrap_or_else(|| "()".to_string());
    let ret = member
        .child_by_field_name("return_type")
        .and_then(|annotation| named_children(&annotation).into_iter().next())
        .map(|ty| node_text(&ty, source).to_string())
        .unwrap_or_else(|| "void".to_string());
    TypeExpr::Named(format!("{params} => {ret}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::parser::{parse_source, SourceLanguage};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn first_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
        if node.kind() == kind {
            return Some(node);
        }
        named_children(&node)
            .into_iter()
            .find_map(|child| first_of_kind(child, kind))
    }

    #[test]
    fn test_interface_members() {
        let source = "interface Props extends Base { isVisible: unknown; count?: number; onPick(id: string): void }";
        let ast = parse_source(source, Path::new("a.ts"), SourceLanguage::TypeScript).unwrap();
        let node = first_of_kind(ast.tree.root_node(), "interface_declaration").unwrap();
        let (name, parts) = interface_parts(&node, source).unwrap();

        assert_eq!(name, "Props");
        assert_eq!(parts[0], PropsPart::Reference("Base".to_string()));
        assert_eq!(
            parts[1],
            PropsPart::Fields(vec![
                FieldDescriptor::untyped("isVisible"),
                FieldDescriptor::new("count", TypeInfo::Known(TypeExpr::Number)).optional(),
                FieldDescriptor::new(
                    "onPick",
                    TypeInfo::Known(TypeExpr::Named("(id: string) => void".to_string()))
                ),
            ])
        );
    }

    #[test]
    fn test_props_with_children_adds_children() {
        let source = "type P = PropsWithChildren<Base & { title: unknown }>;";
        let ast = parse_source(source, Path::new("a.ts"), SourceLanguage::TypeScript).unwrap();
        let node = first_of_kind(ast.tree.root_node(), "type_alias_declaration").unwrap();
        let (_, parts) = alias_parts(&node, source).unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], PropsPart::Reference("Base".to_string()));
        assert!(parts[1].is_inline());
        assert_eq!(
            parts[2],
            PropsPart::Fields(vec![FieldDescriptor::new(
                "children",
                TypeInfo::Known(TypeExpr::Node)
            )
            .optional()])
        );
    }

    #[test]
    fn test_quoted_property_names() {
        let source = "type P = { 'aria-label': string };";
        let ast = parse_source(source, Path::new("a.ts"), SourceLanguage::TypeScript).unwrap();
        let node = first_of_kind(ast.tree.root_node(), "object_type").unwrap();
        let fields = member_fields(&node, source);
        assert_eq!(fields[0].name, "aria-label");
        assert_eq!(fields[0].declared, TypeInfo::Known(TypeExpr::String));
    }
}
