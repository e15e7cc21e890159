use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use crate::stager::StagedCopy;
use crate::supr::{DeliveryProject, Sensitivity, SuprPerson};
use crate::transfer::TransferOutcome;

use super::error::DeliveryError;

/// Project names become a directory under the staging area.
static PROJECT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid project name regex"));

/// Check that a project name is a single, plain path component.
pub fn validate_project_name(name: &str) -> Result<(), DeliveryError> {
    if PROJECT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(DeliveryError::InvalidRequest(format!(
            "project name '{}' must start with a letter or digit and contain only letters, digits, '.', '_' or '-'",
            name
        )))
    }
}

/// One delivery to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRequest {
    /// Project to deliver. Names the staged directory and the SUPR project.
    pub project: String,
    /// Directory holding the data to deliver.
    pub source: PathBuf,
    /// Email of the PI as registered in SUPR.
    pub pi_email: String,
    pub sensitivity: Sensitivity,
}

impl DeliveryRequest {
    pub fn validate(&self) -> Result<(), DeliveryError> {
        validate_project_name(&self.project)?;
        if self.pi_email.trim().is_empty() {
            return Err(DeliveryError::InvalidRequest(
                "PI email cannot be empty".to_string(),
            ));
        }
        if self.source.as_os_str().is_empty() {
            return Err(DeliveryError::InvalidRequest(
                "source path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Steps of a delivery, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStep {
    Resolve,
    Stage,
    Register,
    Wait,
    Transfer,
}

impl DeliveryStep {
    pub const ALL: [DeliveryStep; 5] = [
        Self::Resolve,
        Self::Stage,
        Self::Register,
        Self::Wait,
        Self::Transfer,
    ];
}

impl fmt::Display for DeliveryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolve => "resolve",
            Self::Stage => "stage",
            Self::Register => "register",
            Self::Wait => "wait",
            Self::Transfer => "transfer",
        };
        write!(f, "{}", name)
    }
}

/// Everything a completed delivery produced.
#[derive(Debug, Clone)]
pub struct DeliveryReport {
    pub run_id: Uuid,
    pub project: String,
    pub pi: SuprPerson,
    pub staged: StagedCopy,
    pub delivery_project: DeliveryProject,
    pub transfer: TransferOutcome,
    pub sync_wait_secs: u64,
    pub elapsed_ms: u64,
}

impl DeliveryReport {
    /// Name SUPR assigned to the delivery project.
    pub fn delivery_name(&self) -> &str {
        &self.delivery_project.name
    }
}
