//! Locale codes and the validated set of supported locales.
//!
//! # Responsibilities
//! - Validate individual locale codes (`en`, `pt-BR`)
//! - Hold the ordered list of supported locales plus the default
//! - Answer membership queries for the locale router
//!
//! # Design Decisions
//! - Built once from configuration, immutable afterwards
//! - Membership is exact and case-sensitive (`/EN` is not `/en`)

use std::fmt;

use thiserror::Error;

/// Errors raised while building a [`LocaleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("at least one supported locale is required")]
    Empty,

    #[error("invalid locale code '{0}': expected ASCII letters, digits or '-'")]
    InvalidCode(String),

    #[error("locale '{0}' is listed more than once")]
    Duplicate(String),

    #[error("default locale '{0}' is not in the supported list")]
    DefaultNotSupported(String),
}

/// A single validated locale code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Parse a locale code.
    ///
    /// Codes must be non-empty and may only contain ASCII alphanumerics and
    /// `-`, so they can never smuggle a path separator or file extension.
    pub fn parse(code: &str) -> Result<Self, LocaleError> {
        let valid = !code.is_empty()
            && !code.starts_with('-')
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

        if valid {
            Ok(Self(code.to_string()))
        } else {
            Err(LocaleError::InvalidCode(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free set of supported locales with a designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleSet {
    /// Build a locale set, rejecting empty lists, malformed or duplicated
    /// codes, and a default that is not itself supported.
    pub fn new<S: AsRef<str>>(codes: &[S], default: &str) -> Result<Self, LocaleError> {
        if codes.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut locales: Vec<Locale> = Vec::with_capacity(codes.len());
        for code in codes {
            let locale = Locale::parse(code.as_ref())?;
            if locales.contains(&locale) {
                return Err(LocaleError::Duplicate(locale.0));
            }
            locales.push(locale);
        }

        let default = Locale::parse(default)?;
        if !locales.contains(&default) {
            return Err(LocaleError::DefaultNotSupported(default.0));
        }

        Ok(Self { locales, default })
    }

    /// Look up a supported locale by exact code.
    pub fn get(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.as_str() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// Supported locales in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
