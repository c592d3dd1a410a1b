//! Binary crate for the Plaza Indonesia weather display.
//!
//! This crate focuses on:
//! - Mounting the widget and driving its single fetch
//! - Rendering the loading / error / ready states as text
//! - The static icon animations and the map rendition

use clap::Parser;

mod cli;
mod icons;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    let filter = if cmd.verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(filter);
    env_logger::init_from_env(env);

    cmd.run().await
}
