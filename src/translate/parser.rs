//! Tree-sitter parser integration for JavaScript/TypeScript
//!
//! Provides parsing using tree-sitter grammars for JS/TS/JSX/TSX.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

use crate::core::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl SourceLanguage {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }
}

/// A parsed source file
pub struct SourceAst {
    pub tree: Tree,
    pub path: PathBuf,
    pub source: String,
    pub language: SourceLanguage,
}

/// Get the tree-sitter language for a source variant
fn get_language(language: SourceLanguage) -> TsLanguage {
    match language {
        SourceLanguage::JavaScript | SourceLanguage::Jsx => tree_sitter_javascript::LANGUAGE.into(),
        SourceLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        SourceLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Determine the source language from a file path
pub fn detect_language(path: &Path) -> Option<SourceLanguage> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(SourceLanguage::from_extension)
}

/// Parse JavaScript/TypeScript source code into a tree-sitter AST
pub fn parse_source(content: &str, path: &Path, language: SourceLanguage) -> Result<SourceAst> {
    let mut parser = Parser::new();
    parser
        .set_language(&get_language(language))
        .map_err(|e| Error::parse(path, format!("failed to load grammar: {e}")))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(path, "parser produced no tree"))?;

    if tree.root_node().has_error() {
        log::warn!(
            "{} has syntax errors; extracting what can be recovered",
            path.display()
        );
    }

    Ok(SourceAst {
        tree,
        path: path.to_path_buf(),
        source: content.to_string(),
        language,
    })
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Named children, skipping comments
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// Whether an anonymous token such as `?` appears among a node's children
pub fn has_token(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

/// Property names may be identifiers or quoted strings.
pub fn property_name(node: &Node, source: &str) -> String {
    let text = node_text(node, source);
    match node.kind() {
        "string" => text.trim_matches(|c| c == '"' || c == '\'').to_string(),
        _ => text.to_string(),
    }
}
