//! Error types for template indexing and copying

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by index construction, listing, and copying
#[derive(Debug, Error)]
pub enum TfcError {
    #[error("the Templates folder does not exist; expected location: {path}")]
    TemplatesFolderMissing { path: PathBuf },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("while retrieving categories; the templates folder is empty: {path}")]
    EmptyTemplates { path: PathBuf },

    #[error("failed to get the file type of {path}: {reason}")]
    FileTypeProbeFailed { path: PathBuf, reason: String },

    #[error("Template '{name}' not found.")]
    TemplateNotFound { name: String },

    #[error("the template category '{name}' does not exist")]
    CategoryNotFound { name: String },

    #[error("File '{name}' already exists: {path}")]
    DestinationAlreadyExists { name: String, path: PathBuf },

    #[error("destination directory does not exist: {path}")]
    DestinationDirMissing { path: PathBuf },

    #[error("invalid file name '{raw}': nothing left after removing disallowed characters")]
    InvalidName { raw: String },

    #[error("Failed to copy '{src}' to '{dest}'")]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan {path}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_folder_missing_message() {
        let err = TfcError::TemplatesFolderMissing {
            path: PathBuf::from("/home/user/Templates"),
        };

        let msg = err.to_string();
        assert!(msg.contains("does not exist"));
        assert!(msg.contains("/home/user/Templates"));
    }

    #[test]
    fn test_copy_failed_chains_io_error() {
        let err = TfcError::CopyFailed {
            src: PathBuf::from("/t/a.txt"),
            dest: PathBuf::from("/w/b"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("/t/a.txt"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("denied"));
    }
}
