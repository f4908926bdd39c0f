use std::path::Path;

/// Check whether `install_dir` is visible on the search path.
///
/// Returns a hint for the user when it is not. This is advice only: by the
/// time it runs the installation has already succeeded, and nothing here can
/// fail the run.
pub fn advisory(install_dir: &Path, path_var: Option<&str>) -> Option<String> {
    let dir = install_dir.to_string_lossy();
    if path_var.map(|path| path.contains(dir.as_ref())).unwrap_or(false) {
        return None;
    }

    Some(format!(
        "{} is not on your PATH. Add this line to ~/.bashrc or ~/.zshrc:\n    export PATH=\"{}:$PATH\"",
        dir, dir
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_advisory_when_dir_is_on_path() {
        let dir = PathBuf::from("/home/u/.local/bin");
        let path = "/usr/bin:/home/u/.local/bin:/bin";
        assert_eq!(advisory(&dir, Some(path)), None);
    }

    #[test]
    fn advisory_when_dir_is_absent() {
        let dir = PathBuf::from("/home/u/.local/bin");
        let advice = advisory(&dir, Some("/usr/bin:/bin")).unwrap();
        assert!(advice.contains("/home/u/.local/bin"));
        assert!(advice.contains(".bashrc"));
        assert!(advice.contains(".zshrc"));
    }

    #[test]
    fn advisory_when_path_is_unset() {
        let dir = PathBuf::from("/home/u/.local/bin");
        assert!(advisory(&dir, None).is_some());
    }

    #[test]
    fn advisory_never_panics_on_empty_path() {
        let dir = PathBuf::from("/home/u/.local/bin");
        assert!(advisory(&dir, Some("")).is_some());
    }
}
