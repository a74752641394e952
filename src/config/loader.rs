//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:8000"

            [locales]
            supported = ["en", "fr"]
            default = "en"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8000");
        assert_eq!(config.locales.supported, vec!["en", "fr"]);
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = parse_config("[locales\nsupported = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config(
            r#"
            [locales]
            supported = []
            [timeouts]
            request_secs = 0
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("at least one supported locale"));
        assert!(message.contains("request_secs"));
    }

    #[test]
    fn test_slashed_prefix_cannot_hide_a_locale() {
        let err = parse_config(
            r#"
            [locales]
            supported = ["en", "fr"]
            default = "en"

            [locales.exclusions]
            segment_prefixes = ["/fr", "_next/static"]
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("locale 'fr' is shadowed"));
        assert!(message.contains("'_next/static'"));
    }

    #[test]
    fn test_example_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("app.example.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.locales.default, "en");
        assert_eq!(config.locales.exclusions.exact_paths, vec!["/favicon.ico"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/donation-market.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
