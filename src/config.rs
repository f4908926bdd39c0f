use std::path::PathBuf;

use crate::error::InstallError;

/// GitHub repository that publishes lazylogger releases.
pub const REPO_OWNER: &str = "lazylogger-rs";
pub const REPO_NAME: &str = "lazylogger";

/// Name of the executable shipped inside every release archive.
pub const BINARY_NAME: &str = "lazylogger";

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_DOWNLOAD_BASE: &str = "https://github.com";

/// Everything the install pipeline needs, resolved once up front.
///
/// The base URLs are fields rather than hard-wired constants so the resolver
/// and fetcher can be pointed at a local mock server in tests. Outside of
/// tests they only change through the `LAZYLOGGER_API_BASE` and
/// `LAZYLOGGER_DOWNLOAD_BASE` environment variables.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    pub repo_owner: String,
    pub repo_name: String,
    pub binary_name: String,
    pub install_dir: PathBuf,
    pub api_base: String,
    pub download_base: String,
}

impl InstallConfig {
    /// Build the configuration, installing into `~/.local/bin` unless an
    /// explicit directory was given.
    pub fn new(install_dir: Option<PathBuf>) -> Result<Self, InstallError> {
        let install_dir = match install_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or(InstallError::HomeDirUnavailable)?
                .join(".local")
                .join("bin"),
        };

        Ok(Self {
            repo_owner: REPO_OWNER.to_string(),
            repo_name: REPO_NAME.to_string(),
            binary_name: BINARY_NAME.to_string(),
            install_dir,
            api_base: std::env::var("LAZYLOGGER_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            download_base: std::env::var("LAZYLOGGER_DOWNLOAD_BASE")
                .unwrap_or_else(|_| DEFAULT_DOWNLOAD_BASE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_install_dir_is_kept() {
        let config = InstallConfig::new(Some(PathBuf::from("/opt/tools/bin"))).unwrap();
        assert_eq!(config.install_dir, PathBuf::from("/opt/tools/bin"));
    }

    #[test]
    fn default_install_dir_is_under_home() {
        let config = InstallConfig::new(None).unwrap();
        assert!(config.install_dir.ends_with(".local/bin"));
    }

    #[test]
    fn identity_defaults() {
        let config = InstallConfig::new(Some(PathBuf::from("/tmp"))).unwrap();
        assert_eq!(config.repo_owner, REPO_OWNER);
        assert_eq!(config.repo_name, REPO_NAME);
        assert_eq!(config.binary_name, "lazylogger");
    }
}
