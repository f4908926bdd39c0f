pub mod detection;

// The classify functions are re-exported for tests that feed raw values.
#[allow(unused_imports)]
pub use detection::{
    classify_arch, classify_os, detect, ArchFamily, HostProfile, OsFamily, ReleaseTarget,
};

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsFamily::Linux => write!(f, "linux"),
            OsFamily::Darwin => write!(f, "darwin"),
            OsFamily::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

impl std::fmt::Display for ArchFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchFamily::X86_64 => write!(f, "x86_64"),
            ArchFamily::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}
