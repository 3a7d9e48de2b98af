//! CLI command implementations.
//!
//! Each command writes its report to the writer it is given so the binary
//! can target stdout or a file and tests can capture output.

pub mod classify;
pub mod infer;
pub mod init;
pub mod rules;

pub use classify::{classify_identifiers, ClassifyConfig};
pub use infer::{infer_file, InferConfig};
pub use init::init_config;
pub use rules::list_rules;
