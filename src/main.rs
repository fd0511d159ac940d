use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod logging;
mod management;
mod table;

use cli::RootArgs;

fn main() -> Result<()> {
    let args = RootArgs::parse();
    logging::init(args.global.verbose);

    let config = config::resolve(&args.global)?;
    tracing::info!(base_url = %config.base_url, "resolved config");

    commands::dispatch(&args.command, &config)
}
