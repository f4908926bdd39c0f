use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::InstallConfig;
use crate::error::InstallError;
use crate::platform::ReleaseTarget;

/// User agent sent with every request; GitHub rejects anonymous clients.
pub const USER_AGENT: &str = concat!("lazylogger-install/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const METADATA_TIMEOUT: Duration = Duration::from_secs(30);

/// The subset of the GitHub release JSON we need.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Build the blocking HTTP client shared by the resolver and the fetcher.
///
/// Only the connect phase is bounded here. The metadata request gets a total
/// deadline per call; artifact downloads may legitimately take longer.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
}

/// Resolve the latest published version tag for the configured repository.
///
/// One request, no retries, no cached fallback: if the latest release cannot
/// be determined the run is over.
pub fn resolve_latest(client: &Client, config: &InstallConfig) -> Result<String, InstallError> {
    let url = format!(
        "{}/repos/{}/{}/releases/latest",
        config.api_base, config.repo_owner, config.repo_name
    );
    tracing::debug!("fetching release metadata from {}", url);

    let body = client
        .get(&url)
        .timeout(METADATA_TIMEOUT)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.text())
        .map_err(InstallError::MetadataFetch)?;

    let release: LatestRelease =
        serde_json::from_str(&body).map_err(|e| InstallError::VersionParse(e.to_string()))?;

    let tag = release.tag_name.trim();
    if tag.is_empty() {
        return Err(InstallError::VersionParse(
            "release metadata contained an empty tag_name".to_string(),
        ));
    }

    Ok(tag.to_string())
}

/// Compose the download URL for a release artifact.
///
/// Pure string assembly; the same inputs always produce the same URL.
pub fn artifact_url(config: &InstallConfig, version: &str, target: &ReleaseTarget) -> String {
    format!(
        "{}/{}/{}/releases/latest/download/{}-{}-{}-{}.tar.gz",
        config.download_base,
        config.repo_owner,
        config.repo_name,
        config.binary_name,
        version,
        target.arch,
        target.platform
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
