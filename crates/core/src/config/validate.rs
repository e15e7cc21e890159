use super::{types::DeliverConfig, ConfigError};

/// Validate configuration
/// Currently validates:
/// - SUPR base URL is http(s), user and key are set
/// - Staging area is set and copy buffer is not empty
/// - Transfer command is set
pub fn validate_config(config: &DeliverConfig) -> Result<(), ConfigError> {
    let base_url = config.supr.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "supr.base_url is required".to_string(),
        ));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "supr.base_url must start with http:// or https://, got: {}",
            base_url
        )));
    }
    if config.supr.api_user.is_empty() {
        return Err(ConfigError::ValidationError(
            "supr.api_user is required".to_string(),
        ));
    }
    if config.supr.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "supr.api_key is required".to_string(),
        ));
    }

    if config.staging.staging_area.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "staging.staging_area is required".to_string(),
        ));
    }
    if config.staging.buffer_size == 0 {
        return Err(ConfigError::ValidationError(
            "staging.buffer_size cannot be 0".to_string(),
        ));
    }

    if config.transfer.command.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "transfer.command cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn valid_config() -> DeliverConfig {
        let mut config = DeliverConfig::default();
        config.supr.base_url = "https://supr.example.org/api".to_string();
        config.supr.api_user = "deliver".to_string();
        config.supr.api_key = "secret".to_string();
        config.staging.staging_area = PathBuf::from("/proj/staging");
        config
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_missing_base_url_fails() {
        let mut config = valid_config();
        config.supr.base_url = String::new();
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_non_http_base_url_fails() {
        let mut config = valid_config();
        config.supr.base_url = "ftp://supr.example.org".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_validate_missing_credentials_fails() {
        let mut config = valid_config();
        config.supr.api_key = String::new();
        assert!(validate_config(&config).is_err());

        let mut config = valid_config();
        config.supr.api_user = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_missing_staging_area_fails() {
        let mut config = valid_config();
        config.staging.staging_area = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_buffer_fails() {
        let mut config = valid_config();
        config.staging.buffer_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_wait_is_allowed() {
        let mut config = valid_config();
        config.sync.wait_secs = 0;
        assert!(validate_config(&config).is_ok());
    }
}
