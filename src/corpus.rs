//! Text loading
//!
//! Reads the source text as UTF-8. Every failure path (empty path, missing
//! file, blank file, unreadable or non-UTF-8 content) degrades to an empty
//! corpus with a logged warning; downstream stages treat an empty corpus as
//! "nothing to analyze" rather than an error.

use std::path::Path;
use tracing::warn;

/// Read `path` as UTF-8 text, or return an empty string.
pub fn load_text(path: &Path) -> String {
    if path.as_os_str().is_empty() || !path.exists() {
        warn!("file '{}' not found", path.display());
        return String::new();
    }

    match std::fs::read_to_string(path) {
        Ok(data) if data.trim().is_empty() => {
            warn!("file '{}' is empty", path.display());
            String::new()
        }
        Ok(data) => data,
        Err(e) => {
            warn!("could not read '{}': {}", path.display(), e);
            String::new()
        }
    }
}
