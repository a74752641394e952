//! Locale prefix routing.
//!
//! # Responsibilities
//! - Decide whether a request path already carries a supported locale
//! - Build the default-locale redirect target for paths that do not
//! - Leave excluded paths (assets, API, auth) untouched
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Pure: the decision depends only on the path, the query and the config
//! - Redirect targets always start with a supported locale, so classifying
//!   a target again yields `PassThrough`

use crate::config::LocaleConfig;
use crate::i18n::{Locale, LocaleError, LocaleSet};
use crate::routing::matcher::{first_segment, ExclusionPolicy};

/// Outcome of classifying one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDecision {
    /// The path matches the exclusion policy.
    Excluded,
    /// The first segment is a supported locale.
    PassThrough { locale: Locale },
    /// The path carries no supported locale; send the client here instead.
    Redirect { location: String },
}

/// Locale prefix router built from the single locale configuration.
#[derive(Debug)]
pub struct LocaleRouter {
    locales: LocaleSet,
    exclusions: ExclusionPolicy,
}

impl LocaleRouter {
    pub fn new(locales: LocaleSet, exclusions: ExclusionPolicy) -> Self {
        Self { locales, exclusions }
    }

    pub fn from_config(config: &LocaleConfig) -> Result<Self, LocaleError> {
        let locales = LocaleSet::new(config.supported.as_slice(), &config.default)?;
        Ok(Self::new(locales, ExclusionPolicy::from_config(&config.exclusions)))
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn default_locale(&self) -> &Locale {
        self.locales.default_locale()
    }

    /// Supported locale carried by the first segment of `path`, if any.
    pub fn locale_of(&self, path: &str) -> Option<&Locale> {
        self.locales.get(first_segment(path))
    }

    /// Classify a request path. `query` is the raw query string without `?`.
    pub fn classify(&self, path: &str, query: Option<&str>) -> LocaleDecision {
        if self.exclusions.is_excluded(path) {
            return LocaleDecision::Excluded;
        }

        if let Some(locale) = self.locale_of(path) {
            return LocaleDecision::PassThrough {
                locale: locale.clone(),
            };
        }

        LocaleDecision::Redirect {
            location: self.prefixed(path, query),
        }
    }

    /// Path and query the request ends up at after at most one redirect.
    pub fn rewrite(&self, path: &str, query: Option<&str>) -> String {
        match self.classify(path, query) {
            LocaleDecision::Redirect { location } => location,
            LocaleDecision::Excluded | LocaleDecision::PassThrough { .. } => {
                with_query(path.to_string(), query)
            }
        }
    }

    fn prefixed(&self, path: &str, query: Option<&str>) -> String {
        let default = self.locales.default_locale().as_str();
        let target = match path {
            "" | "/" => format!("/{default}"),
            p if p.starts_with('/') => format!("/{default}{p}"),
            p => format!("/{default}/{p}"),
        };
        with_query(target, query)
    }
}

fn with_query(mut target: String, query: Option<&str>) -> String {
    if let Some(q) = query {
        target.push('?');
        target.push_str(q);
    }
    target
}
