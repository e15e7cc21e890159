//! Error types for the transfer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the transfer utility.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Transfer binary not found.
    #[error("Transfer command not found: {path}")]
    CommandNotFound { path: PathBuf },

    /// The utility exited with a non-zero status.
    #[error("Transfer command {}", describe_exit(.code))]
    NonZeroExit {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// Staged path does not exist.
    #[error("Staged path not found: {path}")]
    StagedPathNotFound { path: PathBuf },

    /// I/O error while spawning or waiting on the process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

impl TransferError {
    /// Creates a non-zero exit error from captured output.
    pub fn non_zero_exit(code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self::NonZeroExit {
            code,
            stdout,
            stderr,
        }
    }

    /// Standard error of the failed process, if any was captured.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::NonZeroExit { stderr, .. } if !stderr.is_empty() => Some(stderr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_exit_message() {
        let err = TransferError::non_zero_exit(Some(5), String::new(), "quota exceeded\n".into());
        assert_eq!(err.to_string(), "Transfer command exited with code 5");
        assert_eq!(err.stderr(), Some("quota exceeded\n"));
    }

    #[test]
    fn test_signal_exit_message() {
        let err = TransferError::non_zero_exit(None, String::new(), String::new());
        assert_eq!(err.to_string(), "Transfer command was terminated by a signal");
        assert_eq!(err.stderr(), None);
    }
}
