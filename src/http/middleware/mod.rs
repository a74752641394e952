//! HTTP middleware.

pub mod locale;
pub mod metrics;

pub use locale::{locale_redirect, ResolvedLocale};
pub use metrics::track_metrics;
