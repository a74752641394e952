//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, security headers, limits,
//!   timeout, metrics, locale redirect)
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::{api, middleware as mw, pages};
use crate::i18n::LocaleError;
use crate::lifecycle::ShutdownSignal;
use crate::routing::LocaleRouter;
use crate::security;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid locale configuration: {0}")]
    Locale(#[from] LocaleError),

    #[error("server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub locales: Arc<LocaleRouter>,
}

/// HTTP server for the web application.
pub struct AppServer {
    router: Router,
    config: AppConfig,
}

impl AppServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, ServerError> {
        let locales = Arc::new(LocaleRouter::from_config(&config.locales)?);

        tracing::info!(
            locales = ?locales.locales().iter().map(|l| l.as_str()).collect::<Vec<_>>(),
            default_locale = %locales.default_locale(),
            "Locale router ready"
        );

        let router = Self::build_router(&config, AppState { locales });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost-last: the request ID is set before the trace span
    /// opens, and the locale redirect sits closest to the handlers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let router = Router::new()
            .merge(pages::page_routes())
            .merge(api::api_routes())
            .fallback(pages::not_found)
            .layer(middleware::from_fn_with_state(
                state.locales.clone(),
                mw::locale_redirect,
            ))
            .with_state(state)
            .layer(middleware::from_fn(mw::track_metrics))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size));

        let router = if config.security.enable_headers {
            security::apply_security_headers(router)
        } else {
            router
        };

        router
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serve on `listener` until the shutdown signal fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
