use thiserror::Error;

use super::types::DeliveryStep;
use crate::stager::StagerError;
use crate::supr::SuprError;
use crate::transfer::TransferError;

/// Why a delivery stopped.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Invalid delivery request: {0}")]
    InvalidRequest(String),

    #[error("Could not resolve PI for email {email}: {source}")]
    PiResolution {
        email: String,
        #[source]
        source: SuprError,
    },

    #[error("Could not stage project: {0}")]
    Staging(#[source] StagerError),

    #[error("Could not create a delivery project: {0}")]
    Registration(#[source] SuprError),

    #[error("Failed to run transfer: {0}")]
    Transfer(#[source] TransferError),
}

impl DeliveryError {
    /// Step the delivery stopped at.
    pub fn step(&self) -> Option<DeliveryStep> {
        match self {
            Self::InvalidRequest(_) => None,
            Self::PiResolution { .. } => Some(DeliveryStep::Resolve),
            Self::Staging(_) => Some(DeliveryStep::Stage),
            Self::Registration(_) => Some(DeliveryStep::Register),
            Self::Transfer(_) => Some(DeliveryStep::Transfer),
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
