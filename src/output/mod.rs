//! Report writers for inferred shapes.

mod json;
mod terminal;
mod typescript;

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::rules::TableVariant;
use crate::translate::InferredShape;

pub use json::JsonWriter;
pub use terminal::TerminalWriter;
pub use typescript::TypeScriptWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    Json,
}

/// Everything inferred for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceReport {
    pub source: PathBuf,
    pub table: TableVariant,
    pub shapes: Vec<InferredShape>,
}

impl InferenceReport {
    pub fn field_count(&self) -> usize {
        self.shapes.iter().map(|shape| shape.fields.len()).sum()
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &InferenceReport) -> anyhow::Result<()>;
}

pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::TypeScript => Box::new(TypeScriptWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
