use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::output::{create_writer, InferenceReport, OutputFormat};
use crate::rules::RuleTable;
use crate::translate::{translate_file, TranslateOptions};

pub struct InferConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub options: TranslateOptions,
}

/// Translate a file, resolve every shape and write the report.
pub fn infer_file<W: Write>(config: &InferConfig, table: &RuleTable, out: W) -> Result<()> {
    let report = build_report(config, table)?;
    log::info!(
        "Inferred {} fields in {} shapes from {}",
        report.field_count(),
        report.shapes.len(),
        config.path.display()
    );

    let mut writer = create_writer(config.format, out);
    writer.write_report(&report)
}

pub fn build_report(config: &InferConfig, table: &RuleTable) -> Result<InferenceReport> {
    let shapes = translate_file(&config.path, &config.options)
        .with_context(|| format!("Failed to translate {}", config.path.display()))?;

    Ok(InferenceReport {
        source: config.path.clone(),
        table: table.variant(),
        shapes: shapes.iter().map(|shape| shape.resolve(table)).collect(),
    })
}
