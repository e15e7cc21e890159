//! SUPR accounting system integration.
//!
//! Resolves the PI of a project by email and registers delivery projects.
//! Both calls are plain passthroughs to the SUPR REST API, authenticated
//! with the API user and key.

mod client;
mod types;

pub use client::SuprClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to SUPR.
#[derive(Debug, Error)]
pub enum SuprError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// SUPR rejected the API credentials.
    #[error("SUPR rejected the API credentials (status {status})")]
    Unauthorized { status: u16 },

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// No person matched the email.
    #[error("There were no hits in SUPR for email: {email}")]
    NoMatch { email: String },

    /// More than one person matched the email.
    #[error("There were {count} hits in SUPR for email: {email}, expected exactly one")]
    AmbiguousMatch { email: String, count: usize },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing base URL, credentials, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// The two SUPR operations a delivery needs.
#[async_trait]
pub trait DeliveryApi: Send + Sync {
    /// Find the single person registered with `email` (case-insensitive).
    async fn search_pi_by_email(&self, email: &str) -> Result<SuprPerson, SuprError>;

    /// Create a delivery project and return the record SUPR stored.
    async fn create_delivery_project(
        &self,
        request: &DeliveryProjectRequest,
    ) -> Result<DeliveryProject, SuprError>;
}
