mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use deliver_core::{
    load_layered, validate_config, DeliveryError, DeliveryRunner, FsStager, OutboxTransfer,
    RunnerSettings, SanitizedConfig, SuprClient, TokioSleep,
};

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<DeliveryError>() {
            Some(delivery_error) => {
                error!("{}", delivery_error);
                std::process::exit(delivery_error.exit_code());
            }
            None => {
                error!("Fatal error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load configuration: file < environment < command line
    let config = load_layered(cli.config.as_deref(), &cli.overrides())
        .context("Failed to load configuration")?;

    validate_config(&config).context("Configuration validation failed")?;
    debug!("Configuration: {:?}", SanitizedConfig::from(&config));

    let api = SuprClient::new(&config.supr).context("Failed to create SUPR client")?;
    let stager = FsStager::new(&config.staging);
    let transfer = OutboxTransfer::new(config.transfer.clone());

    let runner = DeliveryRunner::new(
        api,
        stager,
        transfer,
        TokioSleep,
        RunnerSettings::from_config(&config),
    );

    let report = runner.run(&cli.request()).await?;

    info!(
        "Delivery of {} finished: delivery project {}, {} files ({} bytes) staged at {}, took {} ms",
        report.project,
        report.delivery_name(),
        report.staged.files.len(),
        report.staged.total_bytes,
        report.staged.destination.display(),
        report.elapsed_ms
    );

    Ok(())
}
