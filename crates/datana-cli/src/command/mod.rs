use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use crate::{
    config::ConfigArg,
    loader::{self, LoadError},
};

use self::{analyze::AnalyzeArg, view::ViewArg};

mod analyze;
mod view;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print statistics and histogram of a data sample
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Show the histogram of a data sample as a terminal bar chart
    View(#[clap(flatten)] ViewArg),
}

/// Data sample selection shared by all modes
#[derive(Default, Debug, Clone, Args)]
pub(crate) struct SourceArg {
    /// CSV file with comma or newline separated values
    pub source: Option<PathBuf>,

    #[clap(flatten)]
    pub config: ConfigArg,
}

impl SourceArg {
    pub fn source(&self) -> Result<&Path, LoadError> {
        loader::require_source(self.source.as_deref())
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose);
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::View(arg) => view::run(&arg)?,
    }
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();
}
