mod cli;
mod config;
mod convert;
mod interval_cmd;
mod logging;
mod now_cmd;
mod reformat_cmd;
mod tour;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Tour => tour::run(&config),
        Command::Now(args) => now_cmd::run(args, &config),
        Command::Period(args) => interval_cmd::run_period(args, &config),
        Command::Seconds(args) => interval_cmd::run_seconds(args, &config),
        Command::Reformat(args) => reformat_cmd::run(args),
    }
}
