//! JSON API handlers under `/api`, which the locale router never redirects.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::i18n::PageStrings;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocaleInfo {
    pub code: String,
    /// Whether the locale has its own page copy (otherwise English is shown).
    pub translated: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocalesResponse {
    pub default: String,
    pub locales: Vec<LocaleInfo>,
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/locales", get(locales))
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn locales(State(state): State<AppState>) -> Json<LocalesResponse> {
    let set = state.locales.locales();
    Json(LocalesResponse {
        default: set.default_locale().to_string(),
        locales: set
            .iter()
            .map(|l| LocaleInfo {
                code: l.to_string(),
                translated: PageStrings::has_translation(l.as_str()),
            })
            .collect(),
    })
}
