use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use crate::cli::output;
use crate::config::InstallConfig;
use crate::install::{self, path_check};
use crate::platform;
use crate::release;

#[derive(ClapArgs)]
pub struct Args {
    /// Directory to install the binary into (default: ~/.local/bin)
    #[arg(long, value_name = "DIR", env = "LAZYLOGGER_INSTALL_DIR")]
    pub dir: Option<PathBuf>,
}

/// Run the full pipeline: detect, resolve, locate, install, advise.
///
/// The stages are strictly sequential and the first failure aborts the run.
/// The PATH advisory at the end is informational and can never fail it.
pub fn run(args: Args) -> Result<()> {
    let config = InstallConfig::new(args.dir)?;

    let host = platform::detect();
    output::info(&format!("Detected {}/{}", host.os, host.arch));
    let target = host.release_target()?;

    let client = release::http_client().context("failed to build HTTP client")?;

    let sp = output::spinner("Resolving latest release...");
    let version = release::resolve_latest(&client, &config);
    sp.finish_and_clear();
    let version = version?;
    output::info(&format!("Latest release: {}", version));

    let url = release::artifact_url(&config, &version, &target);
    output::info(&format!("Downloading {}", url));

    let sp = output::spinner("Downloading and extracting...");
    let binary = install::fetch_and_install(&client, &url, &config);
    sp.finish_and_clear();
    let binary = binary?;
    tracing::debug!("installed binary at {}", binary.display());

    output::success(&format!(
        "Installed {} {} to {}",
        config.binary_name,
        version,
        config.install_dir.display()
    ));
    eprintln!("Run '{}' to get started.", config.binary_name);

    let path_var = std::env::var("PATH").ok();
    if let Some(advice) = path_check::advisory(&config.install_dir, path_var.as_deref()) {
        output::warning(&advice);
    }

    Ok(())
}
