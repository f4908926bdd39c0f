mod cli;
mod config;
mod error;
mod install;
mod platform;
mod release;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Diagnostic tracing goes to stderr and stays quiet unless asked for.
    let filter = std::env::var("LAZYLOGGER_LOG").unwrap_or_else(|_| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter.as_str())
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Command::Install(args) => cli::install::run(args),
        Command::Check => cli::check::run(),
    }
}
