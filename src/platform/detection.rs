use crate::error::InstallError;

/// Operating system family, classified from the raw OS name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    Darwin,
    Unsupported(String),
}

/// CPU architecture family, classified from the raw machine string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchFamily {
    X86_64,
    Unsupported(String),
}

/// Host OS and architecture, detected once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    pub os: OsFamily,
    pub arch: ArchFamily,
}

/// The token pair a supported host contributes to release artifact names,
/// e.g. `x86_64` + `unknown-linux-musl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseTarget {
    pub arch: &'static str,
    pub platform: &'static str,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Detect the current host from the standard OS and architecture names.
pub fn detect() -> HostProfile {
    HostProfile {
        os: classify_os(std::env::consts::OS),
        arch: classify_arch(std::env::consts::ARCH),
    }
}

/// Classify a raw OS name. Releases are published for Linux and macOS only.
pub fn classify_os(raw: &str) -> OsFamily {
    match raw {
        "linux" => OsFamily::Linux,
        "macos" => OsFamily::Darwin,
        other => OsFamily::Unsupported(other.to_string()),
    }
}

/// Classify a raw machine architecture. Releases are x86_64 only.
pub fn classify_arch(raw: &str) -> ArchFamily {
    match raw {
        "x86_64" => ArchFamily::X86_64,
        other => ArchFamily::Unsupported(other.to_string()),
    }
}

impl HostProfile {
    /// Map this host onto the tokens used in release artifact names.
    ///
    /// Fails when either value is unsupported, naming the offending raw
    /// value. There is no fallback artifact, so this aborts the run before
    /// any network activity happens.
    pub fn release_target(&self) -> Result<ReleaseTarget, InstallError> {
        let platform = match &self.os {
            OsFamily::Linux => "unknown-linux-musl",
            OsFamily::Darwin => "apple-darwin",
            OsFamily::Unsupported(raw) => {
                return Err(InstallError::UnsupportedPlatform(format!(
                    "operating system `{}`",
                    raw
                )))
            }
        };

        let arch = match &self.arch {
            ArchFamily::X86_64 => "x86_64",
            ArchFamily::Unsupported(raw) => {
                return Err(InstallError::UnsupportedPlatform(format!(
                    "architecture `{}`",
                    raw
                )))
            }
        };

        Ok(ReleaseTarget { arch, platform })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_maps_to_musl_token() {
        let host = HostProfile {
            os: classify_os("linux"),
            arch: classify_arch("x86_64"),
        };
        let target = host.release_target().unwrap();
        assert_eq!(target.platform, "unknown-linux-musl");
        assert_eq!(target.arch, "x86_64");
    }

    #[test]
    fn macos_maps_to_darwin_token() {
        let host = HostProfile {
            os: classify_os("macos"),
            arch: classify_arch("x86_64"),
        };
        let target = host.release_target().unwrap();
        assert_eq!(target.platform, "apple-darwin");
        assert_eq!(target.arch, "x86_64");
    }

    #[test]
    fn unknown_os_is_unsupported() {
        assert_eq!(
            classify_os("freebsd"),
            OsFamily::Unsupported("freebsd".to_string())
        );
    }

    #[test]
    fn unknown_arch_is_unsupported() {
        assert_eq!(
            classify_arch("aarch64"),
            ArchFamily::Unsupported("aarch64".to_string())
        );
    }

    #[test]
    fn unsupported_os_error_names_raw_value() {
        let host = HostProfile {
            os: classify_os("windows"),
            arch: classify_arch("x86_64"),
        };
        let err = host.release_target().unwrap_err();
        assert!(matches!(err, InstallError::UnsupportedPlatform(_)));
        assert!(err.to_string().contains("windows"), "got: {}", err);
    }

    #[test]
    fn unsupported_arch_error_names_raw_value() {
        let host = HostProfile {
            os: classify_os("linux"),
            arch: classify_arch("riscv64"),
        };
        let err = host.release_target().unwrap_err();
        assert!(err.to_string().contains("riscv64"), "got: {}", err);
    }

    #[test]
    fn os_check_comes_before_arch_check() {
        // Both values are unsupported; the OS is reported first.
        let host = HostProfile {
            os: classify_os("windows"),
            arch: classify_arch("aarch64"),
        };
        let err = host.release_target().unwrap_err();
        assert!(err.to_string().contains("operating system"), "got: {}", err);
    }

    #[test]
    fn detect_yields_this_machine() {
        // On any machine the test suite runs on, detection itself never
        // fails; only the token mapping can.
        let host = detect();
        assert_eq!(host, detect());
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(
            classify_os("Linux"),
            OsFamily::Unsupported("Linux".to_string())
        );
        assert_eq!(
            classify_arch("X86_64"),
            ArchFamily::Unsupported("X86_64".to_string())
        );
    }
}
