use crate::config::types::{ClientConfig, Config, OutputConfig};
use crate::ConfigError;

/// Upper bound accepted for `max-redirects`
const MAX_REDIRECT_LIMIT: usize = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_client_config(&config.client)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    if config.max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= {}, got {}",
            MAX_REDIRECT_LIMIT, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    validate_index_file(&config.index_file)
}

/// The index filename must be a single plain path component
fn validate_index_file(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "index-file cannot be empty".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(ConfigError::Validation(format!(
            "index-file cannot be '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "index-file must not contain path separators, got '{}'",
            name
        )));
    }

    Ok(())
}
