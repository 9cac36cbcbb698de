mod app;
mod cache;
mod cli;
mod config;
mod db;
mod http;
mod logging;
mod model;
mod paths;
mod search;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let _log_guard = logging::init()?;
    app::run(cli)
}
