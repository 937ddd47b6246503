//! Configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the templates folder inside the home directory
pub const DEFAULT_TEMPLATES_FOLDER: &str = "Templates";

/// Main tfc configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder name looked up in the home directory
    #[serde(rename = "templates-folder")]
    pub templates_folder: String,

    /// Explicit templates directory; takes precedence over `templates-folder`
    #[serde(rename = "templates-dir")]
    pub templates_dir: Option<PathBuf>,

    /// File-type probe configuration
    pub probe: ProbeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_folder: DEFAULT_TEMPLATES_FOLDER.to_string(),
            templates_dir: None,
            probe: ProbeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// `cwd` is where the project-local `.tfc.yml` is looked up.
    pub fn load(config_path: Option<&PathBuf>, cwd: &Path) -> Result<Self> {
        Self::load_chain(config_path, cwd, dirs::config_dir())
    }

    fn load_chain(config_path: Option<&PathBuf>, cwd: &Path, config_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config: .tfc.yml, then user config: ~/.config/tfc/tfc.yml
        let candidates = [
            Some(cwd.join(".tfc.yml")),
            config_dir.map(|dir| dir.join("tfc").join("tfc.yml")),
        ];

        for path in candidates.iter().flatten() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::debug!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Resolve the templates root against the given home directory
    pub fn templates_root(&self, home: &Path) -> PathBuf {
        match &self.templates_dir {
            Some(dir) => dir.clone(),
            None => home.join(&self.templates_folder),
        }
    }
}

/// File-type probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Run the probe at all; when false every template is typed "unknown"
    pub enabled: bool,

    /// Command to run
    pub command: String,

    /// Arguments passed before the file path
    pub args: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "file".to_string(),
            args: vec!["--mime-type".to_string(), "-b".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.templates_folder, "Templates");
        assert!(config.templates_dir.is_none());
        assert!(config.probe.enabled);
        assert_eq!(config.probe.command, "file");
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
templates-folder: Modeles
probe:
  enabled: false
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.templates_folder, "Modeles");
        assert!(!config.probe.enabled);
        assert_eq!(config.probe.args, vec!["--mime-type", "-b"]);
    }

    #[test]
    fn test_templates_root_resolution() {
        let home = Path::new("/home/alice");
        let mut config = Config::default();
        assert_eq!(config.templates_root(home), PathBuf::from("/home/alice/Templates"));

        config.templates_dir = Some(PathBuf::from("/srv/templates"));
        assert_eq!(config.templates_root(home), PathBuf::from("/srv/templates"));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tfc.yml");
        fs::write(&path, "templates-dir: /opt/tpl\n").unwrap();

        let config = Config::load(Some(&path), temp.path()).unwrap();
        assert_eq!(config.templates_dir, Some(PathBuf::from("/opt/tpl")));
    }

    #[test]
    fn test_load_explicit_path_missing_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.yml");
        assert!(Config::load(Some(&path), temp.path()).is_err());
    }

    #[test]
    fn test_load_prefers_local_config() {
        let cwd = tempdir().unwrap();
        let user = tempdir().unwrap();
        fs::create_dir(user.path().join("tfc")).unwrap();
        fs::write(user.path().join("tfc/tfc.yml"), "templates-folder: User\n").unwrap();
        fs::write(cwd.path().join(".tfc.yml"), "templates-folder: Local\n").unwrap();

        let config = Config::load_chain(None, cwd.path(), Some(user.path().to_path_buf())).unwrap();
        assert_eq!(config.templates_folder, "Local");
    }

    #[test]
    fn test_load_skips_malformed_local_config() {
        let cwd = tempdir().unwrap();
        let user = tempdir().unwrap();
        fs::create_dir(user.path().join("tfc")).unwrap();
        fs::write(user.path().join("tfc/tfc.yml"), "templates-folder: User\n").unwrap();
        fs::write(cwd.path().join(".tfc.yml"), "templates-folder: [unclosed\n").unwrap();

        let config = Config::load_chain(None, cwd.path(), Some(user.path().to_path_buf())).unwrap();
        assert_eq!(config.templates_folder, "User");
    }

    #[test]
    fn test_load_defaults_when_nothing_found() {
        let cwd = tempdir().unwrap();
        let user = tempdir().unwrap();
        fs::write(cwd.path().join(".tfc.yml"), "probe: 42\n").unwrap();

        let config = Config::load_chain(None, cwd.path(), Some(user.path().to_path_buf())).unwrap();
        assert_eq!(config.templates_folder, DEFAULT_TEMPLATES_FOLDER);
        assert!(config.probe.enabled);

        let config = Config::load_chain(None, cwd.path(), None).unwrap();
        assert_eq!(config.templates_folder, DEFAULT_TEMPLATES_FOLDER);
    }
}
