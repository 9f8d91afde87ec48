//! Country pager CLI - Main Entry Point

use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod country;
mod input;
mod render;

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    cli::run(cli)
}
