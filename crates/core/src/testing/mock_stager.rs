//! Mock stager for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::stager::{StagedCopy, Stager, StagerError, StagingJob};

/// Mock implementation of the Stager trait.
///
/// Records jobs without touching the file system and reports an empty
/// staged copy at the requested destination.
#[derive(Debug, Clone)]
pub struct MockStager {
    jobs: Arc<RwLock<Vec<StagingJob>>>,
    next_error: Arc<RwLock<Option<StagerError>>>,
}

impl Default for MockStager {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStager {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the next staging to fail with the given error.
    pub async fn set_next_error(&self, error: StagerError) {
        *self.next_error.write().await = Some(error);
    }

    pub async fn recorded_jobs(&self) -> Vec<StagingJob> {
        self.jobs.read().await.clone()
    }

    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }
}

#[async_trait]
impl Stager for MockStager {
    fn name(&self) -> &str {
        "mock"
    }

    async fn stage(&self, job: StagingJob) -> Result<StagedCopy, StagerError> {
        self.jobs.write().await.push(job.clone());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(StagedCopy {
            destination: job.destination,
            files: vec![],
            directories: 0,
            total_bytes: 0,
            duration_ms: 0,
        })
    }
}
