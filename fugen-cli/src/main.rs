//! Command-line entry point for fugen

use clap::Parser;
use fugen_cli::commands::Commands;

/// Decompound German compound words against a morpheme dictionary
#[derive(Debug, Parser)]
#[command(name = "fugen", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
