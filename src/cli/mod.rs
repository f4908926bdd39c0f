pub mod check;
pub mod install;
pub mod output;

use clap::{Parser, Subcommand};

/// Install the lazylogger log viewer from its latest release
#[derive(Parser)]
#[command(name = "lazylogger-install", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the latest lazylogger release and install it
    Install(install::Args),

    /// Show the latest published version without installing anything
    Check,
}
