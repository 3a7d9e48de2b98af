//! Category rule tables: ordered naming-convention categories.

pub mod category;
pub mod pattern;
pub mod seeds;
pub mod table;

pub use category::{Category, CategoryKind};
pub use pattern::{MatchKind, NamePattern};
pub use table::{CategoryOverrides, RuleTable, TableVariant};
