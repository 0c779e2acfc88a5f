//! Stockweight - metal stock weight calculator
//!
//! A CLI tool that computes the weight of bars, tubes, sheets and profiles
//! from their dimensions and browses the stock list.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use stockweight_app::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
