//! Values captured once at process start

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};

use crate::version::read_version;

/// Program name used in messages
pub const APP_NAME: &str = "tfc";

/// Process-wide values, read once and passed explicitly
#[derive(Debug, Clone)]
pub struct Environment {
    pub app_name: String,
    pub version: String,
    pub home: PathBuf,
    pub cwd: PathBuf,
}

impl Environment {
    /// Capture home, working directory, and version from the running process
    pub fn capture() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let home = resolve_home(std::env::var_os("HOME"), dirs::home_dir())
            .ok_or_else(|| eyre!("Could not determine the home directory"))?;
        Ok(Self::new(home, cwd))
    }

    /// Build an environment for the given home and working directory
    pub fn new(home: PathBuf, cwd: PathBuf) -> Self {
        let version = read_version(&cwd);
        Self {
            app_name: APP_NAME.to_string(),
            version,
            home,
            cwd,
        }
    }

    /// Render `path` relative to home as `~/...` when possible
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.home) {
            Ok(rel) if rel.as_os_str().is_empty() => "~".to_string(),
            Ok(rel) => format!("~/{}", rel.display()),
            Err(_) => path.display().to_string(),
        }
    }
}

/// `HOME` wins when set and non-empty, otherwise the platform lookup
pub fn resolve_home(home_var: Option<OsString>, fallback: Option<PathBuf>) -> Option<PathBuf> {
    home_var.filter(|h| !h.is_empty()).map(PathBuf::from).or(fallback)
}
