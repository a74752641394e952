//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (file or defaults)
//! - Apply command-line overrides and re-validate
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::path::Path;

use crate::config::{load_config, validate_config, AppConfig, ConfigError};

/// Resolve the effective configuration.
///
/// Without a path the built-in defaults are used. A `bind` override replaces
/// `listener.bind_address` before the final validation pass.
pub fn resolve_config(path: Option<&Path>, bind: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(bind) = bind {
        config.listener.bind_address = bind.to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
