//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of every external seam of a
//! delivery, so the runner can be exercised without SUPR, a staging area or
//! the outbox utility.
//!
//! # Example
//!
//! ```rust,ignore
//! use deliver_core::testing::{fixtures, MockDeliveryApi, MockStager, MockTransfer, RecordingWait};
//!
//! let api = MockDeliveryApi::new();
//! api.add_person(fixtures::person(42, "pi@example.org")).await;
//!
//! let runner = DeliveryRunner::new(api, MockStager::new(), MockTransfer::new(), RecordingWait::new(), settings);
//! ```

mod mock_delivery_api;
mod mock_stager;
mod mock_transfer;
mod recording_wait;

pub use mock_delivery_api::MockDeliveryApi;
pub use mock_stager::MockStager;
pub use mock_transfer::MockTransfer;
pub use recording_wait::RecordingWait;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::PathBuf;

    use crate::delivery::DeliveryRequest;
    use crate::supr::{Sensitivity, SuprPerson};

    /// Create a SUPR person with the given id and email.
    pub fn person(id: u64, email: &str) -> SuprPerson {
        SuprPerson {
            id,
            first_name: Some("Test".to_string()),
            last_name: Some(format!("Person{}", id)),
            email: Some(email.to_string()),
        }
    }

    /// Create a delivery request for data under `/proj/data/<project>`.
    pub fn delivery_request(
        project: &str,
        pi_email: &str,
        sensitivity: Sensitivity,
    ) -> DeliveryRequest {
        DeliveryRequest {
            project: project.to_string(),
            source: PathBuf::from(format!("/proj/data/{}", project)),
            pi_email: pi_email.to_string(),
            sensitivity,
        }
    }
}
