mod args;
mod commands;
mod config;
mod git;
mod logging;
mod project;
mod roster;

use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    logging::init();
    let cli = args::Cli::parse();
    cli.run()
}
