//! Trait definitions for the stager module.

use async_trait::async_trait;

use super::error::StagerError;
use super::types::{StagedCopy, StagingJob};

/// Copies a dataset into the staging area.
#[async_trait]
pub trait Stager: Send + Sync {
    /// Returns the name of this stager implementation.
    fn name(&self) -> &str;

    /// Copies `job.source` to `job.destination`.
    ///
    /// Must fail with [`StagerError::DestinationExists`] without touching the
    /// destination when it already exists.
    async fn stage(&self, job: StagingJob) -> Result<StagedCopy, StagerError>;
}
