pub mod config;
pub mod delivery;
pub mod stager;
pub mod supr;
pub mod testing;
pub mod transfer;
pub mod wait;

pub use config::{
    load_config, load_config_from_str, load_layered, validate_config, ConfigError,
    ConfigOverrides, DeliverConfig, SanitizedConfig, StagingConfig, SuprConfig, SyncConfig,
    TransferConfig,
};
pub use delivery::{
    validate_project_name, DeliveryError, DeliveryReport, DeliveryRequest, DeliveryRunner,
    DeliveryStep, RunnerSettings,
};
pub use stager::{staging_destination, FsStager, StagedCopy, Stager, StagerError, StagingJob};
pub use supr::{
    DeliveryApi, DeliveryProject, DeliveryProjectRequest, Sensitivity, SuprClient, SuprError,
    SuprPerson,
};
pub use transfer::{OutboxTransfer, Transfer, TransferError, TransferJob, TransferOutcome};
pub use wait::{SyncWait, TokioSleep};
