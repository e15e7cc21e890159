use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{
    types::{ConfigOverrides, DeliverConfig},
    ConfigError,
};

/// Prefix for environment overrides, e.g. `DELIVER_SUPR__API_KEY`.
pub const ENV_PREFIX: &str = "DELIVER_";

fn env_provider() -> Env {
    // Double underscore separates sections so field names keep their own underscores.
    Env::prefixed(ENV_PREFIX).split("__")
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<DeliverConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: DeliverConfig = Figment::new()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from defaults, an optional file, the environment and
/// command line overrides, in increasing order of precedence.
pub fn load_layered(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<DeliverConfig, ConfigError> {
    let mut figment = Figment::new();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(env_provider())
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<DeliverConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
