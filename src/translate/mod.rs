//! Source-to-field-list translation for JavaScript/TypeScript files.
//!
//! Finds every props-like shape in a file (interfaces, object type
//! aliases, component parameters and `PropTypes` objects) and turns it
//! into [`FieldDescriptor`]s for the resolver. Type references are
//! resolved against the interfaces and aliases declared in the same file;
//! imported types stay unresolved.

mod components;
mod declarations;
pub mod parser;
pub mod prop_types;

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tree_sitter::Node;

use crate::core::errors::{Error, Result};
use crate::core::{FieldDescriptor, ResolvedField, TypeExpr, TypeInfo};
use crate::resolve::resolve_fields;
use crate::rules::pattern::capitalize;
use crate::rules::RuleTable;
use declarations::PropsPart;
use parser::{named_children, node_line, node_text};

pub use parser::{detect_language, parse_source, SourceAst, SourceLanguage};

/// Reference chains deeper than this are treated as unresolved.
const MAX_REFERENCE_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Treat a declared `any` as "no information" rather than a deliberate
    /// open type. Loosely-typed code uses `any` as a placeholder.
    pub treat_any_as_unknown: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            treat_any_as_unknown: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeOrigin {
    Interface,
    TypeAlias,
    Component,
    PropTypes,
}

impl fmt::Display for ShapeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface => write!(f, "interface"),
            Self::TypeAlias => write!(f, "type alias"),
            Self::Component => write!(f, "component"),
            Self::PropTypes => write!(f, "propTypes"),
        }
    }
}

/// A named collection of fields found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropShape {
    pub name: String,
    pub origin: ShapeOrigin,
    pub line: usize,
    pub fields: Vec<FieldDescriptor>,
}

impl PropShape {
    pub fn resolve(&self, table: &RuleTable) -> InferredShape {
        InferredShape {
            name: self.name.clone(),
            origin: self.origin,
            line: self.line,
            fields: resolve_fields(&self.fields, table),
        }
    }
}

/// A shape after every field has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferredShape {
    pub name: String,
    pub origin: ShapeOrigin,
    pub line: usize,
    pub fields: Vec<ResolvedField>,
}

/// Read, parse and extract shapes from a file.
pub fn translate_file(path: &Path, options: &TranslateOptions) -> Result<Vec<PropShape>> {
    let language = detect_language(path).ok_or_else(|| {
        Error::parse(path, "unsupported file extension (expected .js, .jsx, .ts or .tsx)")
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    translate_source(&content, path, language, options)
}

pub fn translate_source(
    content: &str,
    path: &Path,
    language: SourceLanguage,
    options: &TranslateOptions,
) -> Result<Vec<PropShape>> {
    let ast = parse_source(content, path, language)?;
    let shapes = extract_shapes(&ast, options);
    log::debug!("{}: found {} shapes", path.display(), shapes.len());
    Ok(shapes)
}

/// Extract shapes from a parsed file, in source order.
pub fn extract_shapes(ast: &SourceAst, options: &TranslateOptions) -> Vec<PropShape> {
    let mut collector = ShapeCollector::new(&ast.source);
    collector.visit(ast.tree.root_node());
    collector.finish(options)
}

struct PendingShape {
    name: String,
    origin: ShapeOrigin,
    line: usize,
    /// Component a `X.propTypes = {...}` assignment belongs to
    component: Option<String>,
    parts: Vec<PropsPart>,
}

struct ShapeCollector<'s> {
    source: &'s str,
    named_types: HashMap<String, Vec<PropsPart>>,
    pending: Vec<PendingShape>,
}

impl<'s> ShapeCollector<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            named_types: HashMap::new(),
            pending: Vec::new(),
        }
    }

    fn visit(&mut self, node: Node) {
        match node.kind() {
            "interface_declaration" => self.collect_interface(&node),
            "type_alias_declaration" => self.collect_alias(&node),
            "function_declaration" => self.collect_function(&node),
            "variable_declarator" => self.collect_declarator(&node),
            "assignment_expression" => self.collect_prop_types_assignment(&node),
            _ => {}
        }
        for child in named_children(&node) {
            self.visit(child);
        }
    }

    fn push(&mut self, node: &Node, name: String, origin: ShapeOrigin, parts: Vec<PropsPart>) {
        self.pending.push(PendingShape {
            name,
            origin,
            line: node_line(node),
            component: None,
            parts,
        });
    }

    fn collect_interface(&mut self, node: &Node) {
        let Some((name, parts)) = declarations::interface_parts(node, self.source) else {
            return;
        };
        // Interfaces with the same name merge
        self.named_types
            .entry(name.clone())
            .or_default()
            .extend(parts.iter().cloned());
        self.push(node, name, ShapeOrigin::Interface, parts);
    }

    fn collect_alias(&mut self, node: &Node) {
        let Some((name, parts)) = declarations::alias_parts(node, self.source) else {
            return;
        };
        if parts.is_empty() {
            return;
        }
        self.named_types.insert(name.clone(), parts.clone());
        // `type A = B` only renames; it is not a shape of its own
        if parts.iter().any(PropsPart::is_inline) {
            self.push(node, name, ShapeOrigin::TypeAlias, parts);
        }
    }

    fn collect_function(&mut self, node: &Node) {
        if let Some((component, parts)) = components::function_props(node, self.source) {
            self.push(node, format!("{component}Props"), ShapeOrigin::Component, parts);
        }
    }

    fn collect_declarator(&mut self, node: &Node) {
        if let Some((component, parts)) = components::declarator_props(node, self.source) {
            self.push(node, format!("{component}Props"), ShapeOrigin::Component, parts);
            return;
        }

        let (Some(name), Some(value)) = (
            node.child_by_field_name("name"),
            node.child_by_field_name("value"),
        ) else {
            return;
        };
        if let Some(fields) = prop_types::prop_types_fields(&value, self.source) {
            let name = capitalize(node_text(&name, self.source));
            self.push(node, name, ShapeOrigin::PropTypes, vec![PropsPart::Fields(fields)]);
        }
    }

    /// `Button.propTypes = { ... }`
    fn collect_prop_types_assignment(&mut self, node: &Node) {
        let (Some(left), Some(right)) = (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) else {
            return;
        };
        if left.kind() != "member_expression" {
            return;
        }
        let (Some(object), Some(property)) = (
            left.child_by_field_name("object"),
            left.child_by_field_name("property"),
        ) else {
            return;
        };
        if node_text(&property, self.source) != "propTypes" {
            return;
        }
        let Some(fields) = prop_types::prop_types_fields(&right, self.source) else {
            return;
        };

        let component = node_text(&object, self.source).to_string();
        self.pending.push(PendingShape {
            name: format!("{component}Props"),
            origin: ShapeOrigin::PropTypes,
            line: node_line(node),
            component: Some(component),
            parts: vec![PropsPart::Fields(fields)],
        });
    }

    fn finish(self, options: &TranslateOptions) -> Vec<PropShape> {
        let prop_types: HashMap<String, Vec<FieldDescriptor>> = self
            .pending
            .iter()
            .filter_map(|shape| {
                let component = shape.component.as_ref()?;
                Some((component.clone(), self.expand(&shape.parts, options)))
            })
            .collect();
        let component_names: Vec<&str> = self
            .pending
            .iter()
            .filter(|shape| shape.origin == ShapeOrigin::Component)
            .filter_map(|shape| shape.name.strip_suffix("Props"))
            .collect();

        let mut shapes = Vec::new();
        for shape in &self.pending {
            // propTypes of a component found in this file merge into it
            if let Some(component) = &shape.component {
                if component_names.contains(&component.as_str()) {
                    continue;
                }
            }

            let mut fields = self.expand(&shape.parts, options);
            if shape.origin == ShapeOrigin::Component {
                let component = shape.name.strip_suffix("Props").unwrap_or(&shape.name);
                let declared = prop_types.get(component);
                // `FC<CardProps>` adds nothing the CardProps shape lacks
                if declared.is_none() && !shape.parts.iter().any(PropsPart::is_inline) {
                    log::debug!("{component} only references named props types");
                    continue;
                }
                if let Some(declared) = declared {
                    fields = merge_prop_types(fields, declared);
                }
            }
            if fields.is_empty() {
                log::debug!(
                    "Skipping {} `{}` at line {}: no fields found",
                    shape.origin,
                    shape.name,
                    shape.line
                );
                continue;
            }
            shapes.push(PropShape {
                name: shape.name.clone(),
                origin: shape.origin,
                line: shape.line,
                fields,
            });
        }
        shapes
    }

    /// Flatten parts into fields, before any `propTypes` merge sees them.
    fn expand(&self, parts: &[PropsPart], options: &TranslateOptions) -> Vec<FieldDescriptor> {
        let mut fields = Vec::new();
        self.expand_into(parts, 0, &mut fields);
        if options.treat_any_as_unknown {
            for field in &mut fields {
                if field.declared == TypeInfo::Known(TypeExpr::Any) {
                    field.declared = TypeInfo::Unknown;
                }
            }
        }
        fields
    }

    fn expand_into(&self, parts: &[PropsPart], depth: usize, out: &mut Vec<FieldDescriptor>) {
        for part in parts {
            match part {
                PropsPart::Fields(fields) => {
                    for field in fields {
                        upsert(out, field.clone());
                    }
                }
                PropsPart::Reference(name) => {
                    if depth >= MAX_REFERENCE_DEPTH {
                        log::warn!("Type reference chain through `{name}` is too deep; stopping");
                        continue;
                    }
                    match self.named_types.get(name) {
                        Some(referenced) => self.expand_into(referenced, depth + 1, out),
                        None => log::debug!("Type `{name}` is not declared in this file"),
                    }
                }
            }
        }
    }
}

/// Later declarations of a field replace earlier ones, keeping position.
fn upsert(fields: &mut Vec<FieldDescriptor>, field: FieldDescriptor) {
    match fields.iter_mut().find(|existing| existing.name == field.name) {
        Some(existing) => *existing = field,
        None => fields.push(field),
    }
}

/// Fill untyped component fields from the component's `propTypes`.
fn merge_prop_types(
    fields: Vec<FieldDescriptor>,
    declared: &[FieldDescriptor],
) -> Vec<FieldDescriptor> {
    let mut merged = fields;
    for prop in declared {
        match merged.iter_mut().find(|f| f.name == prop.name) {
            Some(field) if !field.declared.is_known() => {
                field.declared = prop.declared.clone();
                field.optional = field.optional || prop.optional;
            }
            Some(_) => {}
            None => merged.push(prop.clone()),
        }
    }
    merged
}
