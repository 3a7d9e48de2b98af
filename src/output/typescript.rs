use std::io::Write;

use super::{InferenceReport, OutputWriter};

/// Emits one `export interface` per shape.
pub struct TypeScriptWriter<W: Write> {
    writer: W,
}

impl<W: Write> TypeScriptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TypeScriptWriter<W> {
    fn write_report(&mut self, report: &InferenceReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "// Inferred from {} ({} table)",
            report.source.display(),
            report.table
        )?;
        if uses_react_node(report) {
            writeln!(self.writer, "import type {{ ReactNode }} from 'react';")?;
        }

        for shape in &report.shapes {
            writeln!(self.writer)?;
            writeln!(self.writer, "export interface {} {{", shape.name)?;
            for field in &shape.fields {
                let optional = if field.optional { "?" } else { "" };
                writeln!(
                    self.writer,
                    "  {}{}: {};",
                    property_key(&field.name),
                    optional,
                    field.resolved
                )?;
            }
            writeln!(self.writer, "}}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn uses_react_node(report: &InferenceReport) -> bool {
    report
        .shapes
        .iter()
        .flat_map(|shape| &shape.fields)
        .any(|field| field.resolved.to_string().contains("ReactNode"))
}

/// Quote keys that are not valid identifiers, e.g. `aria-label`.
fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if valid {
        name.to_string()
    } else {
        let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
        format!("'{escaped}'")
    }
}
