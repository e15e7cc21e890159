//! Error types for the stager module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while staging a dataset.
#[derive(Debug, Error)]
pub enum StagerError {
    /// Source directory not found.
    #[error("Source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Source exists but is not a directory.
    #[error("Source is not a directory: {path}")]
    SourceNotDirectory { path: PathBuf },

    /// Destination already exists. Needs manual cleanup.
    #[error("There already exists a directory at: {path} You will need to remove that before going forward.")]
    DestinationExists { path: PathBuf },

    /// Failed to create a directory in the staged tree.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list a source directory.
    #[error("Failed to read directory: {path}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy file.
    #[error("Failed to copy file from {source} to {destination}")]
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StagerError {
    /// Creates a copy failed error.
    pub fn copy_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::CopyFailed {
            source,
            destination,
            error,
        }
    }

    /// Whether the failure needs someone to clean up the staging area.
    pub fn requires_manual_cleanup(&self) -> bool {
        matches!(self, Self::DestinationExists { .. })
    }
}
