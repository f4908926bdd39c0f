use anyhow::{Context, Result};

use crate::cli::output;
use crate::config::InstallConfig;
use crate::release;

/// Resolve and print the latest published version, installing nothing.
pub fn run() -> Result<()> {
    let config = InstallConfig::new(None)?;
    let client = release::http_client().context("failed to build HTTP client")?;

    let sp = output::spinner("Resolving latest release...");
    let version = release::resolve_latest(&client, &config);
    sp.finish_and_clear();

    println!("{}", version?);
    Ok(())
}
