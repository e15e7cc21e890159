//! Trait definitions for the transfer module.

use async_trait::async_trait;

use super::error::TransferError;
use super::types::{TransferJob, TransferOutcome};

/// Starts the transfer of a staged delivery.
#[async_trait]
pub trait Transfer: Send + Sync {
    /// Returns the name of this transfer implementation.
    fn name(&self) -> &str;

    /// Runs the transfer. Any non-zero exit is an error.
    async fn transfer(&self, job: TransferJob) -> Result<TransferOutcome, TransferError>;
}
