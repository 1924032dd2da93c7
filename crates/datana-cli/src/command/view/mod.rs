//! Interactive histogram view
//!
//! Shows the statistics and the histogram of a data sample as a full-screen
//! terminal bar chart.

use clap::Args;

use crate::{analysis, command::SourceArg};

use self::app::App;

mod app;
mod widgets;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct ViewArg {
    #[clap(flatten)]
    pub input: SourceArg,
}

pub(crate) fn run(arg: &ViewArg) -> anyhow::Result<()> {
    let config = arg.input.config.resolve()?;
    let source = arg.input.source()?;
    let analysis = analysis::analyze_source(source, &config)?;

    let mut terminal = ratatui::init();
    let app_result = App::new(source.display().to_string(), analysis).run(&mut terminal);
    ratatui::restore();
    app_result
}
