//! Report command handler
//!
//! Writes the PDF report to a file.

use crate::cli::{CircleArgs, StyleArgs};
use crate::config::Config;
use crate::constants::report::FILE_NAME;
use crate::error::{Error, Result};
use crate::report::{export_report, ReportMetadata, ReportOptions};
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Report command arguments
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub circle: CircleArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Author name (defaults to author.name)
    #[arg(long)]
    pub author: Option<String>,

    /// Author contact (defaults to author.contact)
    #[arg(long)]
    pub contact: Option<String>,

    /// Report title (defaults to report.title)
    #[arg(long)]
    pub title: Option<String>,

    /// Extra line as LABEL=VALUE (repeatable)
    #[arg(long = "field", value_name = "LABEL=VALUE")]
    pub fields: Vec<String>,

    /// Output file
    #[arg(long, short = 'o', default_value = FILE_NAME)]
    pub output: PathBuf,
}

/// Run the report command
pub fn run(args: ReportArgs) -> Result<()> {
    let config = Config::load()?;
    let points = args.circle.resolve(&config)?;
    let style = args.style.resolve(&config)?;

    let metadata = ReportMetadata {
        author_name: args.author.unwrap_or_else(|| config.author.name.clone()),
        author_contact: args.contact.unwrap_or_else(|| config.author.contact.clone()),
        point_color: style.point_color,
        center_color: style.center_color,
    };
    let options = ReportOptions {
        show_index: style.show_index,
        extra_fields: parse_fields(&args.fields)?,
    };
    let mut settings = config.report_settings();
    if let Some(title) = args.title {
        settings.title = title;
    }

    let bytes = export_report(&points, &metadata, &options, &settings);
    std::fs::write(&args.output, &bytes)?;
    eprintln!("Report written to {}", args.output.display());

    Ok(())
}

/// Split `LABEL=VALUE` arguments
fn parse_fields(fields: &[String]) -> Result<BTreeMap<String, String>> {
    fields
        .iter()
        .map(|field| {
            field
                .split_once('=')
                .map(|(label, value)| (label.trim().to_string(), value.trim().to_string()))
                .filter(|(label, _)| !label.is_empty())
                .ok_or_else(|| Error::Config(format!("Expected LABEL=VALUE, got: {}", field)))
        })
        .collect()
}
