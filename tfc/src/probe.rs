//! File-type probing
//!
//! The index asks a [`FileTypeProbe`] for a short type label (usually a MIME
//! type) for every template it scans. The default probe shells out to
//! `file --mime-type -b`; tests plug in closures instead.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;
use thiserror::Error;

use crate::config::ProbeConfig;

/// Label recorded when the probe cannot classify a file
pub const UNKNOWN_TYPE: &str = "unknown";

/// Errors returned by a probe
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("'{command}' produced no output")]
    EmptyOutput { command: String },
}

/// Capability that maps a file path to a type label
pub trait FileTypeProbe {
    fn probe(&self, path: &Path) -> Result<String, ProbeError>;
}

impl<F> FileTypeProbe for F
where
    F: Fn(&Path) -> Result<String, ProbeError>,
{
    fn probe(&self, path: &Path) -> Result<String, ProbeError> {
        self(path)
    }
}

/// Probe backed by an external command such as `file --mime-type -b`
#[derive(Debug, Clone)]
pub struct CommandProbe {
    command: String,
    args: Vec<String>,
}

impl CommandProbe {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl Default for CommandProbe {
    fn default() -> Self {
        Self::new("file", vec!["--mime-type".to_string(), "-b".to_string()])
    }
}

impl FileTypeProbe for CommandProbe {
    fn probe(&self, path: &Path) -> Result<String, ProbeError> {
        debug!("probing {} with {}", path.display(), self.command);

        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ProbeError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                command: self.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let label = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if label.is_empty() {
            return Err(ProbeError::EmptyOutput {
                command: self.command.clone(),
            });
        }
        Ok(label)
    }
}

/// Probe that labels everything as unknown without running anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl FileTypeProbe for NoProbe {
    fn probe(&self, _path: &Path) -> Result<String, ProbeError> {
        Ok(UNKNOWN_TYPE.to_string())
    }
}

/// Build the probe described by the configuration
pub fn from_config(config: &ProbeConfig) -> Box<dyn FileTypeProbe> {
    if config.enabled {
        Box::new(CommandProbe::new(config.command.clone(), config.args.clone()))
    } else {
        Box::new(NoProbe)
    }
}
