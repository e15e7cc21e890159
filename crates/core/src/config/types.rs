use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeliverConfig {
    #[serde(default)]
    pub supr: SuprConfig,
    #[serde(default)]
    pub staging: StagingConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub transfer: TransferConfig,
}

/// SUPR accounting API configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SuprConfig {
    /// Base URL of the SUPR instance (e.g., "https://supr.example.org/api")
    #[serde(default)]
    pub base_url: String,
    /// API user for basic authentication
    #[serde(default)]
    pub api_user: String,
    /// API key for basic authentication
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds. Unset means the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Staging area configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StagingConfig {
    /// Directory the project is copied into before transfer
    #[serde(default)]
    pub staging_area: PathBuf,
    /// Record a SHA-256 checksum for every staged file
    #[serde(default)]
    pub verify_checksums: bool,
    /// Buffer size for file copies in bytes
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            staging_area: PathBuf::new(),
            verify_checksums: false,
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_buffer_size() -> usize {
    1024 * 1024 // 1 MB
}

/// Wait between registration and transfer, while SUPR syncs to storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    #[serde(default = "default_wait_secs")]
    pub wait_secs: u64,
}

impl SyncConfig {
    pub fn wait(&self) -> Duration {
        Duration::from_secs(self.wait_secs)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            wait_secs: default_wait_secs(),
        }
    }
}

fn default_wait_secs() -> u64 {
    75 * 60 // 1 h 15 min
}

/// External transfer utility configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferConfig {
    /// Path to the transfer binary
    #[serde(default = "default_transfer_command")]
    pub command: PathBuf,
    /// Arguments inserted before the staged path and delivery name
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            command: default_transfer_command(),
            extra_args: Vec::new(),
        }
    }
}

fn default_transfer_command() -> PathBuf {
    PathBuf::from("to_outbox")
}

/// Values given on the command line. They win over file and environment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub supr: SuprOverrides,
    pub staging: StagingOverrides,
    pub sync: SyncOverrides,
    pub transfer: TransferOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuprOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StagingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_area: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<PathBuf>,
}

/// Sanitized config for debug logging (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub supr: SanitizedSuprConfig,
    pub staging: StagingConfig,
    pub sync: SyncConfig,
    pub transfer: TransferConfig,
}

/// Sanitized SUPR config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSuprConfig {
    pub base_url: String,
    pub api_user: String,
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl From<&DeliverConfig> for SanitizedConfig {
    fn from(config: &DeliverConfig) -> Self {
        Self {
            supr: SanitizedSuprConfig {
                base_url: config.supr.base_url.clone(),
                api_user: config.supr.api_user.clone(),
                api_key_configured: !config.supr.api_key.is_empty(),
                timeout_secs: config.supr.timeout_secs,
            },
            staging: config.staging.clone(),
            sync: config.sync.clone(),
            transfer: config.transfer.clone(),
        }
    }
}
