//! Localized web server for a skills-for-charity marketplace.

pub mod config;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::AppConfig;
pub use http::AppServer;
pub use lifecycle::{Shutdown, ShutdownSignal};
pub use routing::{LocaleDecision, LocaleRouter};
