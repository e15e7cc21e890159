//! Delivery runner implementation.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::DeliverConfig;
use crate::stager::{staging_destination, Stager, StagingJob};
use crate::supr::{DeliveryApi, DeliveryProjectRequest};
use crate::transfer::{Transfer, TransferJob};
use crate::wait::{describe_wait, SyncWait};

use super::error::DeliveryError;
use super::types::{DeliveryReport, DeliveryRequest, DeliveryStep};

/// Runner settings that come from configuration rather than the request.
#[derive(Debug, Clone)]
pub struct RunnerSettings {
    /// Directory the project is staged under.
    pub staging_area: PathBuf,
    pub verify_checksums: bool,
    /// Wait between registration and transfer.
    pub sync_wait: Duration,
}

impl RunnerSettings {
    pub fn from_config(config: &DeliverConfig) -> Self {
        Self {
            staging_area: config.staging.staging_area.clone(),
            verify_checksums: config.staging.verify_checksums,
            sync_wait: config.sync.wait(),
        }
    }
}

/// Runs deliveries against the four collaborating systems.
///
/// Every run gets its own `delivery` span carrying a run id and the project
/// name, so all log lines of one delivery can be told apart.
pub struct DeliveryRunner<A, S, T, W>
where
    A: DeliveryApi,
    S: Stager,
    T: Transfer,
    W: SyncWait,
{
    api: A,
    stager: S,
    transfer: T,
    waiter: W,
    settings: RunnerSettings,
    today: Option<NaiveDate>,
}

impl<A, S, T, W> DeliveryRunner<A, S, T, W>
where
    A: DeliveryApi,
    S: Stager,
    T: Transfer,
    W: SyncWait,
{
    /// Create a new runner.
    pub fn new(api: A, stager: S, transfer: T, waiter: W, settings: RunnerSettings) -> Self {
        Self {
            api,
            stager,
            transfer,
            waiter,
            settings,
            today: None,
        }
    }

    /// Fix the start date of registered projects instead of using the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Deliver one project. Stops at the first failing step.
    pub async fn run(&self, request: &DeliveryRequest) -> Result<DeliveryReport, DeliveryError> {
        request.validate()?;

        let run_id = Uuid::new_v4();
        let span = info_span!("delivery", %run_id, project = %request.project);

        self.run_steps(run_id, request).instrument(span).await
    }

    async fn run_steps(
        &self,
        run_id: Uuid,
        request: &DeliveryRequest,
    ) -> Result<DeliveryReport, DeliveryError> {
        let start = Instant::now();

        info!("Starting delivery of project: {}", request.project);

        // Resolve
        debug!(step = %DeliveryStep::Resolve, "Looking up PI by email");
        let pi = self
            .api
            .search_pi_by_email(&request.pi_email)
            .await
            .map_err(|source| DeliveryError::PiResolution {
                email: request.pi_email.clone(),
                source,
            })?;
        info!(
            "Found a matching PI for email: {}, with id: {}",
            request.pi_email, pi.id
        );

        // Stage
        let destination = staging_destination(&self.settings.staging_area, &request.project);
        info!(
            step = %DeliveryStep::Stage,
            stager = self.stager.name(),
            "Starting to copy {} into {}",
            request.source.display(),
            destination.display()
        );
        let staged = self
            .stager
            .stage(StagingJob {
                source: request.source.clone(),
                destination,
                verify_checksums: self.settings.verify_checksums,
            })
            .await
            .map_err(|e| {
                if e.requires_manual_cleanup() {
                    warn!("Staging area must be cleaned up by hand before retrying this delivery");
                }
                DeliveryError::Staging(e)
            })?;
        info!(
            "Staged {} files ({} bytes) in {} ms",
            staged.files.len(),
            staged.total_bytes,
            staged.duration_ms
        );

        // Register
        let registration = DeliveryProjectRequest::new(
            &request.project,
            pi.id,
            request.sensitivity,
            self.today(),
        );
        debug!(
            step = %DeliveryStep::Register,
            "Registering delivery project '{}' ({} to {}, {})",
            registration.title,
            registration.start_date,
            registration.end_date,
            request.sensitivity
        );
        let delivery_project = self
            .api
            .create_delivery_project(&registration)
            .await
            .map_err(DeliveryError::Registration)?;
        info!(
            "Successfully created a delivery project, which got the id: {}",
            delivery_project.name
        );

        // Wait
        let wait = self.settings.sync_wait;
        if wait.is_zero() {
            debug!(step = %DeliveryStep::Wait, "Sync wait disabled");
        } else {
            info!(
                step = %DeliveryStep::Wait,
                "Will now sleep for {} while waiting for storage to sync the projects from SUPR...",
                describe_wait(wait)
            );
            self.waiter.wait(wait).await;
            info!("Waking up, will now start the transfer");
        }

        // Transfer
        let transfer = self
            .transfer
            .transfer(TransferJob {
                staged_path: staged.destination.clone(),
                delivery_name: delivery_project.name.clone(),
            })
            .await
            .map_err(|e| {
                if let Some(stderr) = e.stderr() {
                    error!(
                        step = %DeliveryStep::Transfer,
                        "{} wrote to stderr:\n{}",
                        self.transfer.name(),
                        stderr.trim_end()
                    );
                }
                DeliveryError::Transfer(e)
            })?;
        info!(
            step = %DeliveryStep::Transfer,
            "Successfully ran {}, here is its log:\n{}",
            self.transfer.name(),
            transfer.stdout
        );
        if !transfer.stderr.trim().is_empty() {
            warn!(
                "{} wrote to stderr:\n{}",
                self.transfer.name(),
                transfer.stderr.trim_end()
            );
        }

        Ok(DeliveryReport {
            run_id,
            project: request.project.clone(),
            pi,
            staged,
            delivery_project,
            transfer,
            sync_wait_secs: wait.as_secs(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        })
    }
}
