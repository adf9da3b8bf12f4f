//! jamo-match - Korean guess validation with jamo-level fuzzy matching
//!
//! Command-line front end for the matcher, the Hangul helpers and word banks.

use clap::Parser;
use colored::Colorize;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use jamo_match::cli::commands;
use jamo_match::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = commands::execute(cli.command, cli.config) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
