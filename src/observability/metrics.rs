//! Metrics collection and exposition.
//!
//! # Metrics
//! - `app_requests_total` (counter): requests by method and status
//! - `app_request_duration_seconds` (histogram): latency distribution
//! - `app_locale_redirects_total` (counter): locale redirects by reason
//!
//! Recording is a no-op until a recorder is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Why a request was redirected to the default locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// The path was `/` or empty.
    Root,
    /// The first segment was not a supported locale.
    MissingLocale,
}

impl RedirectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectReason::Root => "root",
            RedirectReason::MissingLocale => "missing_locale",
        }
    }

    pub fn for_path(path: &str) -> Self {
        if path.is_empty() || path == "/" {
            RedirectReason::Root
        } else {
            RedirectReason::MissingLocale
        }
    }
}

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "app_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("app_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_locale_redirect(reason: RedirectReason) {
    metrics::counter!("app_locale_redirects_total", "reason" => reason.as_str()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_reason() {
        assert_eq!(RedirectReason::for_path("/"), RedirectReason::Root);
        assert_eq!(RedirectReason::for_path(""), RedirectReason::Root);
        assert_eq!(RedirectReason::for_path("/browse"), RedirectReason::MissingLocale);
        assert_eq!(RedirectReason::MissingLocale.as_str(), "missing_locale");
    }

    #[test]
    fn test_locale_redirects_are_recorded() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            record_locale_redirect(RedirectReason::MissingLocale);
            record_locale_redirect(RedirectReason::MissingLocale);
            record_request("GET", 307, Instant::now());
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"app_locale_redirects_total{reason="missing_locale"} 2"#));
        assert!(rendered.contains("app_requests_total{"));
        assert!(rendered.contains(r#"status="307""#));
        assert!(!rendered.contains(r#"reason="root""#));
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_request("GET", 200, Instant::now());
        record_locale_redirect(RedirectReason::Root);
    }
}
