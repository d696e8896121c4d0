//! Export of the label catalog for tools that describe the same fields.
//!
//! A metadata consumer that needs the exact prompt text of a field can read
//! it from an export instead of keeping its own copy of the literal.
//!
//! ## Supported Formats
//!
//! - **CSV**: `category,name,value` rows with a header
//! - **JSON**: pretty-printed array of `{category, name, value}` objects

use super::registry::Label;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
}

impl Exporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Writes `labels` to the file at `path`, or to stdout when `path` is `None`.
    pub fn export(&self, labels: &[&Label], path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => self.write(labels, File::create(path)?),
            None => self.write(labels, io::stdout().lock()),
        }
    }

    pub fn write<W: Write>(&self, labels: &[&Label], writer: W) -> Result<()> {
        match self.format {
            ExportFormat::Csv => Self::write_csv(labels, writer),
            ExportFormat::Json => Self::write_json(labels, writer),
        }
    }

    fn write_csv<W: Write>(labels: &[&Label], writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["category", "name", "value"])?;

        for label in labels {
            wtr.write_record([label.category.key(), label.name, label.value])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(labels: &[&Label], mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, labels)?;
        writeln!(writer)?;
        Ok(())
    }
}
