//! Sync wait that returns immediately.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::wait::SyncWait;

/// Records requested waits instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingWait {
    waits: Arc<RwLock<Vec<Duration>>>,
}

impl RecordingWait {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn recorded_waits(&self) -> Vec<Duration> {
        self.waits.read().await.clone()
    }
}

#[async_trait]
impl SyncWait for RecordingWait {
    async fn wait(&self, duration: Duration) {
        self.waits.write().await.push(duration);
    }
}
