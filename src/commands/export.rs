//! Exports registry labels for external metadata consumers.
//!
//! Output goes to stdout unless `--output` is given, so an export can be
//! piped straight into another tool.

use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        registry::{self, Category},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Only export labels of this category (repeatable)
    #[arg(short, long, value_enum)]
    category: Vec<Category>,

    /// Output format; defaults to the configured export format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Output file; defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let display = Config::read()?.display();
    let format = args.format.unwrap_or(display.export_format);
    let categories = if args.category.is_empty() { Category::ALL.to_vec() } else { args.category };
    let labels = registry::select(&registry::unique_categories(&categories));

    match args.output {
        Some(path) => {
            msg_info!(Message::ExportingLabels(labels.len(), format.to_string()));
            Exporter::new(format).export(&labels, Some(path.as_path()))?;
            msg_success!(Message::ExportCompleted(path.display().to_string()));
        }
        None => Exporter::new(format).export(&labels, None)?,
    }

    Ok(())
}
