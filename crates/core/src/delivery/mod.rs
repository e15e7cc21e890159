//! Delivery orchestration.
//!
//! Drives one project through the fixed sequence
//! Resolve → Stage → Register → Wait → Transfer.
//! The first failing step ends the run; nothing is retried and nothing
//! done by earlier steps is undone.

mod error;
mod runner;
mod types;

pub use error::DeliveryError;
pub use runner::{DeliveryRunner, RunnerSettings};
pub use types::{validate_project_name, DeliveryReport, DeliveryRequest, DeliveryStep};
