//! Application version lookup

use regex::Regex;
use std::fs;
use std::path::Path;

/// Version compiled into the binary
pub const FALLBACK_VERSION: &str = env!("CARGO_PKG_VERSION");

const VERSION_PATTERN: &str = r"^[0-9]+\.[0-9]+\.[0-9]+$";

/// Read the version from a `VERSION` file in `dir`
///
/// The file is used only when its trimmed content looks like
/// `MAJOR.MINOR.PATCH`; anything else falls back to [`FALLBACK_VERSION`].
pub fn read_version(dir: &Path) -> String {
    let version_file = dir.join("VERSION");
    let Ok(content) = fs::read_to_string(&version_file) else {
        return FALLBACK_VERSION.to_string();
    };

    let candidate = content.trim();
    match Regex::new(VERSION_PATTERN) {
        Ok(re) if re.is_match(candidate) => candidate.to_string(),
        Ok(_) => {
            log::debug!("Ignoring malformed version file {}", version_file.display());
            FALLBACK_VERSION.to_string()
        }
        Err(e) => {
            log::warn!("Invalid version pattern {}: {}", VERSION_PATTERN, e);
            FALLBACK_VERSION.to_string()
        }
    }
}
