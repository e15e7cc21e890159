//! Mock transfer for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::transfer::{Transfer, TransferError, TransferJob, TransferOutcome};

/// Mock implementation of the Transfer trait.
#[derive(Debug, Clone)]
pub struct MockTransfer {
    jobs: Arc<RwLock<Vec<TransferJob>>>,
    stdout: Arc<RwLock<String>>,
    next_error: Arc<RwLock<Option<TransferError>>>,
}

impl Default for MockTransfer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransfer {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Vec::new())),
            stdout: Arc::new(RwLock::new("moved".to_string())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the output reported by successful transfers.
    pub async fn set_stdout(&self, stdout: &str) {
        *self.stdout.write().await = stdout.to_string();
    }

    /// Configure the next transfer to fail with the given error.
    pub async fn set_next_error(&self, error: TransferError) {
        *self.next_error.write().await = Some(error);
    }

    pub async fn recorded_jobs(&self) -> Vec<TransferJob> {
        self.jobs.read().await.clone()
    }

    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }
}

#[async_trait]
impl Transfer for MockTransfer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn transfer(&self, job: TransferJob) -> Result<TransferOutcome, TransferError> {
        self.jobs.write().await.push(job.clone());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(TransferOutcome {
            command_line: vec![
                "mock".to_string(),
                job.staged_path.to_string_lossy().to_string(),
                job.delivery_name,
            ],
            exit_code: Some(0),
            stdout: self.stdout.read().await.clone(),
            stderr: String::new(),
            duration_ms: 0,
        })
    }
}
