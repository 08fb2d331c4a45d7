mod backup;
mod cli;
mod commands;
mod config;
mod error;
mod fs;
mod migrate;
mod output;
mod transform;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
