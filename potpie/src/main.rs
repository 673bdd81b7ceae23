// potpie/src/main.rs
//! potpie entry point.
//!
//! Parses the command line, sets up logging and dispatches to the command
//! implementations. Errors are reported on stderr with their full cause chain.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::process;

use potpie::cli::{Cli, Commands};
use potpie::commands::{preview, translate, validate};
use potpie::logger;
use potpie::ui::output;

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Translate(cmd) => translate::run_translate(cmd, cli.quiet),
        Commands::Preview(cmd) => preview::run_preview(cmd),
        Commands::Validate(cmd) => validate::run_validate(cmd, cli.quiet),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    if let Err(err) = run(&cli) {
        output::error_msg(format!("{:#}", err));
        process::exit(1);
    }
}
