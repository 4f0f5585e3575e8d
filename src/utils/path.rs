//! Path utilities: resolve the data directory, expand ~.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Directory holding the data and log files: the `--dir` override when
/// given, the working directory otherwise.
pub fn resolve_data_dir(overridden: Option<&str>) -> PathBuf {
    match overridden {
        Some(p) => expand_tilde(p),
        None => PathBuf::from("."),
    }
}
