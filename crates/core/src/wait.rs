//! Waiting for SUPR data to reach the storage system.
//!
//! There is no signal to poll: the delay is a fixed window, configurable via
//! `sync.wait_secs`.

use async_trait::async_trait;
use std::time::Duration;

/// Blocks the delivery until the synchronization window has passed.
#[async_trait]
pub trait SyncWait: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleep;

#[async_trait]
impl SyncWait for TokioSleep {
    async fn wait(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        tokio::time::sleep(duration).await;
    }
}

/// Human readable form of a wait, e.g. "1 h 15 min".
pub fn describe_wait(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{} min", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{} s", seconds));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_sleep_waits_full_duration() {
        let start = tokio::time::Instant::now();
        TokioSleep.wait(Duration::from_secs(75 * 60)).await;
        assert!(start.elapsed() >= Duration::from_secs(75 * 60));
    }

    #[tokio::test]
    async fn test_zero_wait_returns_immediately() {
        TokioSleep.wait(Duration::ZERO).await;
    }

    #[test]
    fn test_describe_wait() {
        assert_eq!(describe_wait(Duration::from_secs(4500)), "1 h 15 min");
        assert_eq!(describe_wait(Duration::from_secs(90)), "1 min 30 s");
        assert_eq!(describe_wait(Duration::ZERO), "0 s");
    }
}
