//! `to_outbox` based transfer implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

use super::error::TransferError;
use super::traits::Transfer;
use super::types::{TransferJob, TransferOutcome};
use crate::config::TransferConfig;

/// Runs the outbox utility as a child process and waits for it.
pub struct OutboxTransfer {
    config: TransferConfig,
}

impl OutboxTransfer {
    /// Creates a new outbox transfer with the given configuration.
    pub fn new(config: TransferConfig) -> Self {
        Self { config }
    }

    /// Creates a transfer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TransferConfig::default())
    }

    /// Builds the argument list: extra args, staged path, delivery name.
    fn build_args(&self, job: &TransferJob) -> Vec<String> {
        let mut args = self.config.extra_args.clone();
        args.push(job.staged_path.to_string_lossy().to_string());
        args.push(job.delivery_name.clone());
        args
    }
}

#[async_trait]
impl Transfer for OutboxTransfer {
    fn name(&self) -> &str {
        "to_outbox"
    }

    async fn transfer(&self, job: TransferJob) -> Result<TransferOutcome, TransferError> {
        let start = Instant::now();

        if tokio::fs::metadata(&job.staged_path).await.is_err() {
            return Err(TransferError::StagedPathNotFound {
                path: job.staged_path.clone(),
            });
        }

        let args = self.build_args(&job);
        let mut command_line = vec![self.config.command.to_string_lossy().to_string()];
        command_line.extend(args.iter().cloned());

        debug!("Running transfer command: {:?}", command_line);

        let output = Command::new(&self.config.command)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TransferError::CommandNotFound {
                        path: self.config.command.clone(),
                    }
                } else {
                    TransferError::Io(e)
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(TransferError::non_zero_exit(
                output.status.code(),
                stdout,
                stderr,
            ));
        }

        Ok(TransferOutcome {
            command_line,
            exit_code: output.status.code(),
            stdout,
            stderr,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
