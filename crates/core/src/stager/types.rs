//! Types for the stager module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a project is staged: `<staging_area>/<project>`.
pub fn staging_destination(staging_area: &Path, project: &str) -> PathBuf {
    staging_area.join(project)
}

/// A staging request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StagingJob {
    /// Directory to copy.
    pub source: PathBuf,
    /// Path the copy is created at. Must not exist yet.
    pub destination: PathBuf,
    /// Record a SHA-256 checksum of every copied file.
    pub verify_checksums: bool,
}

/// A single file in the staged copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StagedFile {
    /// Path relative to the staged root.
    pub relative_path: PathBuf,
    pub size_bytes: u64,
    /// Hex SHA-256 of the copied content, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Result of a successful staging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StagedCopy {
    /// Root of the staged tree.
    pub destination: PathBuf,
    pub files: Vec<StagedFile>,
    /// Directories created below the root.
    pub directories: usize,
    pub total_bytes: u64,
    pub duration_ms: u64,
}
