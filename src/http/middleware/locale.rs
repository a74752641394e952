//! Locale redirect middleware.
//! Sends requests without a supported locale prefix to the default locale.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::http::request::RequestIdExt;
use crate::i18n::Locale;
use crate::observability::metrics::{self, RedirectReason};
use crate::routing::{LocaleDecision, LocaleRouter};

/// Locale resolved from the path prefix, attached to passed-through requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLocale(pub Locale);

pub async fn locale_redirect(
    State(router): State<Arc<LocaleRouter>>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    let query = req.uri().query();

    match router.classify(path, query) {
        LocaleDecision::Excluded => next.run(req).await,
        LocaleDecision::PassThrough { locale } => {
            req.extensions_mut().insert(ResolvedLocale(locale));
            next.run(req).await
        }
        LocaleDecision::Redirect { location } => {
            tracing::debug!(
                request_id = %req.request_id(),
                path = %path,
                location = %location,
                "Redirecting to default locale"
            );
            redirect(path, &location)
        }
    }
}

fn redirect(path: &str, location: &str) -> Response {
    metrics::record_locale_redirect(RedirectReason::for_path(path));
    Redirect::temporary(location).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, StatusCode},
        middleware,
        routing::get,
        Extension, Router,
    };
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    use crate::config::LocaleConfig;

    fn app() -> Router {
        let router = Arc::new(LocaleRouter::from_config(&LocaleConfig::default()).unwrap());
        Router::new()
            .route(
                "/{locale}/browse",
                get(|Extension(ResolvedLocale(locale)): Extension<ResolvedLocale>| async move {
                    locale.to_string()
                }),
            )
            .route("/api/data", get(|| async { "data" }))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn_with_state(router, locale_redirect))
    }

    async fn send(uri: &str) -> Response {
        app()
            .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_locale_redirects_with_query() {
        let response = send("/browse?x=1").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/en/browse?x=1");
    }

    #[test]
    fn test_redirect_is_counted_by_reason() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let response = ::metrics::with_local_recorder(&recorder, || {
            redirect("/", "/en");
            redirect("/browse", "/en/browse")
        });

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/en/browse");
        let rendered = handle.render();
        assert!(rendered.contains(r#"app_locale_redirects_total{reason="root"} 1"#));
        assert!(rendered.contains(r#"app_locale_redirects_total{reason="missing_locale"} 1"#));
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_locale() {
        let response = send("/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/en");
    }

    #[tokio::test]
    async fn test_supported_locale_passes_through_with_extension() {
        let response = send("/fr/browse").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"fr");
    }

    #[tokio::test]
    async fn test_excluded_path_is_untouched() {
        let response = send("/api/data").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send("/_next/chunk.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
