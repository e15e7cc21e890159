//! Transfer module for handing the staged copy to the outbox utility.
//!
//! The utility is invoked as `to_outbox <staged_path> <delivery_project_name>`
//! and a zero exit status is the only success signal.

mod error;
mod outbox;
mod traits;
mod types;

pub use error::TransferError;
pub use outbox::OutboxTransfer;
pub use traits::Transfer;
pub use types::{TransferJob, TransferOutcome};
