use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use deliver_core::{
    ConfigOverrides, DeliveryRequest, Sensitivity,
    config::{StagingOverrides, SuprOverrides, SyncOverrides, TransferOverrides},
};

/// Deliver a project: stage it, register a SUPR delivery project and hand it
/// to to_outbox.
#[derive(Parser, Debug)]
#[command(name = "deliver", version)]
#[command(group(
    ArgGroup::new("sensitivity")
        .required(true)
        .args(["sensitive", "not_sensitive"]),
))]
pub struct Cli {
    /// Name of the project you want to deliver, determines name of delivery project created in SUPR
    #[arg(short = 'p', long)]
    pub project: String,

    /// Path to the directory to deliver
    #[arg(short = 'i', long)]
    pub path: PathBuf,

    /// Path to the directory where the project should be staged prior to delivery
    #[arg(short = 's', long, alias = "staging_area")]
    pub staging_area: Option<PathBuf>,

    /// Email address of the PI (must be the same as in SUPR)
    #[arg(short = 'e', long)]
    pub email: String,

    /// Base URL of the SUPR instance to use
    #[arg(short = 'u', long, alias = "supr_url")]
    pub supr_url: Option<String>,

    /// SUPR API user
    #[arg(short = 'a', long, alias = "supr_api_user")]
    pub supr_api_user: Option<String>,

    /// SUPR API key
    #[arg(short = 'k', long, alias = "supr_api_key")]
    pub supr_api_key: Option<String>,

    /// Debug level logging
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Project contains sensitive personal data
    #[arg(long)]
    pub sensitive: bool,

    /// Project does not contain sensitive personal data
    #[arg(long)]
    pub not_sensitive: bool,

    /// TOML configuration file
    #[arg(short = 'c', long, env = "DELIVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seconds to wait for SUPR to sync to storage before the transfer (default 4500)
    #[arg(long)]
    pub sync_wait_secs: Option<u64>,

    /// Transfer utility to run instead of to_outbox
    #[arg(long)]
    pub transfer_command: Option<PathBuf>,
}

impl Cli {
    pub fn sensitivity(&self) -> Sensitivity {
        if self.sensitive {
            Sensitivity::Sensitive
        } else {
            Sensitivity::NotSensitive
        }
    }

    /// Command line values that override file and environment configuration.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            supr: SuprOverrides {
                base_url: self.supr_url.clone(),
                api_user: self.supr_api_user.clone(),
                api_key: self.supr_api_key.clone(),
            },
            staging: StagingOverrides {
                staging_area: self.staging_area.clone(),
            },
            sync: SyncOverrides {
                wait_secs: self.sync_wait_secs,
            },
            transfer: TransferOverrides {
                command: self.transfer_command.clone(),
            },
        }
    }

    pub fn request(&self) -> DeliveryRequest {
        DeliveryRequest {
            project: self.project.clone(),
            source: self.path.clone(),
            pi_email: self.email.clone(),
            sensitivity: self.sensitivity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const BASE: [&str; 9] = [
        "deliver", "-p", "P123", "-i", "/proj/data/P123", "-e", "pi@example.org", "-s",
        "/proj/staging",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(BASE.iter().chain(extra.iter()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sensitive_flag() {
        let cli = parse(&["--sensitive"]).unwrap();
        assert_eq!(cli.sensitivity(), Sensitivity::Sensitive);

        let cli = parse(&["--not-sensitive"]).unwrap();
        assert_eq!(cli.sensitivity(), Sensitivity::NotSensitive);
    }

    #[test]
    fn test_sensitivity_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_sensitivity_flags_are_exclusive() {
        assert!(parse(&["--sensitive", "--not-sensitive"]).is_err());
    }

    #[test]
    fn test_underscore_aliases() {
        let cli = parse(&[
            "--sensitive",
            "--supr_url",
            "https://supr.example.org/api",
            "--supr_api_user",
            "deliver",
            "--supr_api_key",
            "secret",
        ])
        .unwrap();
        assert_eq!(cli.supr_url.as_deref(), Some("https://supr.example.org/api"));
        assert_eq!(cli.supr_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_overrides_and_request() {
        let cli = parse(&["--not-sensitive", "-d", "--sync-wait-secs", "0"]).unwrap();
        assert!(cli.debug);

        let overrides = cli.overrides();
        assert_eq!(overrides.sync.wait_secs, Some(0));
        assert_eq!(
            overrides.staging.staging_area,
            Some(PathBuf::from("/proj/staging"))
        );
        assert!(overrides.supr.base_url.is_none());

        let request = cli.request();
        assert_eq!(request.project, "P123");
        assert_eq!(request.source, PathBuf::from("/proj/data/P123"));
        assert_eq!(request.pi_email, "pi@example.org");
    }
}
