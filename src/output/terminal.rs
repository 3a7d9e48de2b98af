use colored::*;
use std::io::Write;

use super::{InferenceReport, OutputWriter};
use crate::core::ResolutionSource;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &InferenceReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "Inferred props for".bold().blue(),
            report.source.display().to_string().bold()
        )?;
        writeln!(
            self.writer,
            "Table: {}  Shapes: {}  Fields: {}",
            report.table.to_string().cyan(),
            report.shapes.len(),
            report.field_count()
        )?;

        if report.shapes.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "No props shapes found.".yellow())?;
            return Ok(());
        }

        for shape in &report.shapes {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} {} (line {})",
                shape.name.bold(),
                format!("[{}]", shape.origin).dimmed(),
                shape.line
            )?;

            let width = shape
                .fields
                .iter()
                .map(|f| f.name.len() + usize::from(f.optional))
                .max()
                .unwrap_or(0);
            for field in &shape.fields {
                let label = format!("{}{}", field.name, if field.optional { "?" } else { "" });
                let source = match field.source {
                    ResolutionSource::Declared => "declared".normal(),
                    ResolutionSource::Inferred => {
                        format!("inferred: {}", field.category).green()
                    }
                    ResolutionSource::Fallback => "no match".yellow(),
                };
                writeln!(
                    self.writer,
                    "  {:<width$}  {}  ({})",
                    label,
                    field.resolved,
                    source,
                    width = width
                )?;
            }
        }
        Ok(())
    }
}
