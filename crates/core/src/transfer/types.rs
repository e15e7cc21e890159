//! Types for the transfer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to transfer and under which delivery project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferJob {
    /// Root of the staged copy.
    pub staged_path: PathBuf,
    /// Name SUPR assigned to the delivery project.
    pub delivery_name: String,
}

/// Result of a successful transfer invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferOutcome {
    /// Program and arguments as invoked.
    pub command_line: Vec<String>,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}
