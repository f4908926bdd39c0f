use thiserror::Error;

/// Everything that can abort an install run.
///
/// Every variant is fatal: the pipeline stops at the first error and the
/// process exits non-zero. There is no retry logic and no fallback version.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("failed to fetch release metadata: {0}")]
    MetadataFetch(#[source] reqwest::Error),

    #[error("could not read a version tag from release metadata: {0}")]
    VersionParse(String),

    #[error("failed to download release artifact: {0}")]
    ArtifactFetch(#[source] reqwest::Error),

    #[error("failed to extract release archive: {0}")]
    Extraction(#[source] std::io::Error),

    #[error("archive did not contain a `{0}` binary")]
    BinaryMissing(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine home directory")]
    HomeDirUnavailable,
}
