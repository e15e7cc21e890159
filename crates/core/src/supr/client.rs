//! HTTP client for the SUPR REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::types::{
    select_sole_match, DeliveryProject, DeliveryProjectRequest, PersonSearchResponse, SuprPerson,
};
use super::{DeliveryApi, SuprError};
use crate::config::SuprConfig;

/// SUPR API client.
pub struct SuprClient {
    client: Client,
    base_url: String,
    api_user: String,
    api_key: String,
}

impl SuprClient {
    /// Create a new SUPR client.
    pub fn new(config: &SuprConfig) -> Result<Self, SuprError> {
        if config.base_url.trim().is_empty() {
            return Err(SuprError::NotConfigured(
                "SUPR base URL is required".to_string(),
            ));
        }
        if config.api_user.is_empty() || config.api_key.is_empty() {
            return Err(SuprError::NotConfigured(
                "SUPR API user and key are required".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            api_user: config.api_user.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map a non-success response to an error, keeping the body for context.
    async fn check_status(response: Response) -> Result<Response, SuprError> {
        let status = response.status();
        if status == 401 || status == 403 {
            return Err(SuprError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuprError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl DeliveryApi for SuprClient {
    async fn search_pi_by_email(&self, email: &str) -> Result<SuprPerson, SuprError> {
        let url = format!("{}/person/search/", self.base_url);

        debug!("SUPR person search: email='{}'", email);

        // email_i is the case-insensitive variant of the email filter
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.api_user, Some(&self.api_key))
            .query(&[("email_i", email)])
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        let search_result: PersonSearchResponse = response.json().await.map_err(|e| {
            SuprError::ParseError(format!("Failed to parse person search response: {}", e))
        })?;

        debug!(
            "SUPR person search returned {} match(es)",
            search_result.matches.len()
        );

        select_sole_match(email, search_result.matches)
    }

    async fn create_delivery_project(
        &self,
        request: &DeliveryProjectRequest,
    ) -> Result<DeliveryProject, SuprError> {
        let url = format!("{}/ngi_delivery/project/create/", self.base_url);

        debug!(
            "SUPR create delivery project: title='{}', pi_id={}",
            request.title, request.pi_id
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.api_user, Some(&self.api_key))
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        let project: DeliveryProject = response.json().await.map_err(|e| {
            SuprError::ParseError(format!(
                "Failed to parse delivery project response: {}",
                e
            ))
        })?;

        Ok(project)
    }
}
