//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale set (codes, duplicates, default membership)
//! - Detect locales shadowed by a redirect exclusion
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::i18n::{Locale, LocaleError, LocaleSet};
use crate::routing::matcher::normalize_segment;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("locales: {0}")]
    Locale(#[from] LocaleError),

    #[error("locale '{0}' is shadowed by a redirect exclusion and would be unreachable")]
    ShadowedLocale(String),

    #[error("invalid exact exclusion path '{0}': must start with '/'")]
    InvalidExclusionPath(String),

    #[error("invalid exclusion segment prefix '{0}': must be a single non-empty path segment")]
    InvalidSegmentPrefix(String),

    #[error("{field}: '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check every semantic rule and report all violations at once.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_locales(config, &mut errors);

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_locales(config: &AppConfig, errors: &mut Vec<ValidationError>) {
    let locales = &config.locales;
    let exclusions = &locales.exclusions;

    if let Err(e) = LocaleSet::new(locales.supported.as_slice(), &locales.default) {
        errors.push(e.into());
    }

    for prefix in &exclusions.segment_prefixes {
        let segment = normalize_segment(prefix);
        if segment.is_empty() || segment.contains('/') {
            errors.push(ValidationError::InvalidSegmentPrefix(prefix.clone()));
        }
    }

    for path in &exclusions.exact_paths {
        if !path.starts_with('/') {
            errors.push(ValidationError::InvalidExclusionPath(path.clone()));
        }
    }

    // A locale named like an excluded segment would pass the router untouched
    // but could never be reached through a redirect.
    for code in &locales.supported {
        if Locale::parse(code).is_err() {
            continue;
        }
        let shadowed = exclusions
            .segment_prefixes
            .iter()
            .any(|p| normalize_segment(p) == code)
            || exclusions.exact_paths.iter().any(|p| p.trim_start_matches('/') == code);
        if shadowed {
            errors.push(ValidationError::ShadowedLocale(code.clone()));
        }
    }
}
