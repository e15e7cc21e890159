//! Mock SUPR API for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::supr::{
    select_sole_match, DeliveryApi, DeliveryProject, DeliveryProjectRequest, SuprError,
    SuprPerson,
};

/// Mock implementation of the DeliveryApi trait.
///
/// Provides controllable behavior for testing:
/// - Register people that the email search can find (case-insensitive)
/// - Record delivery project registrations for assertions
/// - Simulate failures of either call
///
/// Clones share state, so a test can keep one handle and give another to
/// the runner.
///
/// # Example
///
/// ```rust,ignore
/// use deliver_core::testing::{fixtures, MockDeliveryApi};
///
/// let api = MockDeliveryApi::new();
/// api.add_person(fixtures::person(42, "pi@example.org")).await;
///
/// let pi = api.search_pi_by_email("PI@example.org").await?;
/// assert_eq!(pi.id, 42);
/// ```
#[derive(Debug, Clone)]
pub struct MockDeliveryApi {
    /// People the search can return.
    people: Arc<RwLock<Vec<SuprPerson>>>,
    /// Emails searched for.
    searches: Arc<RwLock<Vec<String>>>,
    /// Registrations received.
    registrations: Arc<RwLock<Vec<DeliveryProjectRequest>>>,
    /// Name given to created delivery projects.
    delivery_name: Arc<RwLock<String>>,
    /// If set, the next search fails with this error.
    next_search_error: Arc<RwLock<Option<SuprError>>>,
    /// If set, the next creation fails with this error.
    next_create_error: Arc<RwLock<Option<SuprError>>>,
}

impl Default for MockDeliveryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDeliveryApi {
    /// Create a new mock with no people registered.
    pub fn new() -> Self {
        Self {
            people: Arc::new(RwLock::new(Vec::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            registrations: Arc::new(RwLock::new(Vec::new())),
            delivery_name: Arc::new(RwLock::new("delivery00001".to_string())),
            next_search_error: Arc::new(RwLock::new(None)),
            next_create_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Register a person.
    pub async fn add_person(&self, person: SuprPerson) {
        self.people.write().await.push(person);
    }

    /// Set the name returned for created delivery projects.
    pub async fn set_delivery_name(&self, name: &str) {
        *self.delivery_name.write().await = name.to_string();
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_search_error(&self, error: SuprError) {
        *self.next_search_error.write().await = Some(error);
    }

    /// Configure the next creation to fail with the given error.
    pub async fn set_next_create_error(&self, error: SuprError) {
        *self.next_create_error.write().await = Some(error);
    }

    /// Number of searches performed.
    pub async fn search_count(&self) -> usize {
        self.searches.read().await.len()
    }

    /// Emails searched for, in order.
    pub async fn recorded_searches(&self) -> Vec<String> {
        self.searches.read().await.clone()
    }

    /// Registrations received, in order.
    pub async fn recorded_registrations(&self) -> Vec<DeliveryProjectRequest> {
        self.registrations.read().await.clone()
    }
}

#[async_trait]
impl DeliveryApi for MockDeliveryApi {
    async fn search_pi_by_email(&self, email: &str) -> Result<SuprPerson, SuprError> {
        self.searches.write().await.push(email.to_string());

        if let Some(error) = self.next_search_error.write().await.take() {
            return Err(error);
        }

        let matches: Vec<SuprPerson> = self
            .people
            .read()
            .await
            .iter()
            .filter(|p| {
                p.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email))
            })
            .cloned()
            .collect();

        select_sole_match(email, matches)
    }

    async fn create_delivery_project(
        &self,
        request: &DeliveryProjectRequest,
    ) -> Result<DeliveryProject, SuprError> {
        self.registrations.write().await.push(request.clone());

        if let Some(error) = self.next_create_error.write().await.take() {
            return Err(error);
        }

        let mut extra = serde_json::Map::new();
        extra.insert("title".to_string(), request.title.clone().into());
        extra.insert("pi_id".to_string(), request.pi_id.into());

        Ok(DeliveryProject {
            name: self.delivery_name.read().await.clone(),
            extra,
        })
    }
}
