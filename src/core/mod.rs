//! Core type vocabulary shared by the classifier, the merge step and the
//! translators.

pub mod errors;
pub mod types;

pub use types::{FieldDescriptor, ResolutionSource, ResolvedField, TypeExpr, TypeInfo};
