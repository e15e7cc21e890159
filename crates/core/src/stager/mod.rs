//! Stager module for copying a dataset into the staging area.
//!
//! The staged copy is what the transfer utility picks up. A destination that
//! already exists is never touched: staging fails and the directory has to be
//! removed by hand before the delivery can be retried.
//!
//! # Example
//!
//! ```ignore
//! use deliver_core::stager::{staging_destination, FsStager, Stager, StagingJob};
//!
//! let stager = FsStager::with_defaults();
//! let job = StagingJob {
//!     source: PathBuf::from("/proj/data/P123"),
//!     destination: staging_destination(Path::new("/proj/staging"), "P123"),
//!     verify_checksums: false,
//! };
//!
//! let staged = stager.stage(job).await?;
//! println!("Staged {} files ({} bytes)", staged.files.len(), staged.total_bytes);
//! ```

mod error;
mod fs_stager;
mod traits;
mod types;

pub use error::StagerError;
pub use fs_stager::FsStager;
pub use traits::Stager;
pub use types::{staging_destination, StagedCopy, StagedFile, StagingJob};
