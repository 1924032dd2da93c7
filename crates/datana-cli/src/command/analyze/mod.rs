//! Analysis report command
//!
//! Loads a data sample, computes its descriptive statistics and histogram,
//! and writes them as a text table or as JSON.

mod table;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::{analysis, command::SourceArg, schema::report::AnalysisReport, util::Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    pub input: SourceArg,

    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let AnalyzeArg {
        input,
        format,
        output,
    } = arg;
    let config = input.config.resolve()?;
    let source = input.source()?;
    let analysis = analysis::analyze_source(source, &config)?;

    let mut output = Output::from_output_path(output.as_deref())?;
    match format {
        ReportFormat::Text => {
            table::write_report(&mut output, source, &analysis)
                .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
        }
        ReportFormat::Json => {
            let report = AnalysisReport::new(source, &config, &analysis);
            output.write_json(&report)?;
        }
    }
    log::info!("Report written to {}", output.display_path());

    Ok(())
}
