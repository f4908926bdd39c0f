pub mod path_check;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use tar::Archive;

use crate::config::InstallConfig;
use crate::error::InstallError;

/// Download the artifact at `url` and install it into the configured
/// directory.
///
/// The archive is streamed straight from the response body through gzip and
/// tar; nothing is buffered to disk first. Running this twice with the same
/// artifact overwrites the previous install. If extraction fails partway the
/// target directory may be left partially populated.
pub fn fetch_and_install(
    client: &Client,
    url: &str,
    config: &InstallConfig,
) -> Result<PathBuf, InstallError> {
    fs::create_dir_all(&config.install_dir)?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(InstallError::ArtifactFetch)?;

    extract_archive(response, &config.install_dir)?;

    let binary = config.install_dir.join(&config.binary_name);
    if !binary.is_file() {
        return Err(InstallError::BinaryMissing(config.binary_name.clone()));
    }
    make_executable(&binary)?;

    Ok(binary)
}

/// Unpack a gzip-compressed tar stream into `target_dir`.
///
/// Release archives wrap their contents in a single top-level directory named
/// after the release, so the first path component of every entry is stripped.
/// The binary then lands directly in `target_dir` whatever the wrapper
/// directory is called.
fn extract_archive<R: Read>(reader: R, target_dir: &Path) -> Result<(), InstallError> {
    let tar = GzDecoder::new(reader);
    let mut archive = Archive::new(tar);

    let mut unpacked = 0usize;
    for entry in archive.entries().map_err(InstallError::Extraction)? {
        let mut entry = entry.map_err(InstallError::Extraction)?;
        let path = entry.path().map_err(InstallError::Extraction)?.into_owned();

        // The wrapper directory entry itself strips to an empty path.
        let stripped: PathBuf = path.components().skip(1).collect();
        if stripped.as_os_str().is_empty() {
            continue;
        }

        let dest = target_dir.join(&stripped);
        if entry.header().entry_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            entry.unpack(&dest).map_err(InstallError::Extraction)?;
            unpacked += 1;
        }
    }

    tracing::debug!("unpacked {} files into {}", unpacked, target_dir.display());
    Ok(())
}

/// Add execute bits (owner, group, other) to the installed binary.
#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), InstallError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
