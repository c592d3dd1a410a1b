use clap::Parser;
use cuaca_core::{LOCATION_LABEL, OpenMeteoProvider, WeatherWidget};
use log::debug;
use std::io;

use crate::render::render;

/// Top-level CLI struct.
///
/// The display takes no weather parameters; the location, provider and
/// map view are compiled in.
#[derive(Debug, Parser)]
#[command(name = "cuaca", version, about = "Plaza Indonesia weather display")]
pub struct Cli {
    /// Log fetch diagnostics (payloads, failure causes) to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut stdout = io::stdout();

        debug!("mounting weather widget for {LOCATION_LABEL}");
        let mut widget = WeatherWidget::mount(OpenMeteoProvider::new());

        // First paint happens before the fetch resolves, like any
        // mounted widget: show the loading indicator, then the outcome.
        render(widget.state(), &mut stdout)?;
        widget.load().await;
        render(widget.state(), &mut stdout)?;

        // A failed fetch degrades to the error line; it is not a
        // process failure.
        Ok(())
    }
}
