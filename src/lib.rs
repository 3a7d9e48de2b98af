//! Infer prop types from naming conventions.
//!
//! Field names such as `onClick`, `isVisible` or `itemCount` are matched
//! against an ordered [`RuleTable`] of categories; the first category that
//! accepts a name implies its type. [`resolve`] then merges that guess
//! with whatever type is already declared for the field, and a declared
//! type always wins.
//!
//! ```
//! use propinfer::{classify, resolve, RuleTable, TypeExpr, TypeInfo};
//!
//! let table = RuleTable::prop_keys();
//! let implied = classify("isVisible", table).implied;
//! assert_eq!(resolve(&implied, &TypeInfo::Unknown), TypeExpr::Boolean);
//! assert_eq!(
//!     resolve(&implied, &TypeInfo::Known(TypeExpr::String)),
//!     TypeExpr::String
//! );
//! ```

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod core;
pub mod output;
pub mod resolve;
pub mod rules;
pub mod translate;

pub use crate::core::errors;

// Re-export commonly used types
pub use crate::classifier::{classify, Classification};
pub use crate::context::{create_safe_context, ContextError, ContextProvider, SafeContext};
pub use crate::core::errors::{Error, Result};
pub use crate::core::{FieldDescriptor, ResolutionSource, ResolvedField, TypeExpr, TypeInfo};
pub use crate::resolve::{resolve, resolve_field, resolve_fields};
pub use crate::rules::{Category, CategoryKind, MatchKind, RuleTable, TableVariant};
pub use crate::translate::{extract_shapes, translate_file, InferredShape, PropShape};
