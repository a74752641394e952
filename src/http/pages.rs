//! Placeholder page handlers.
//!
//! Every page renders the same "coming soon" shell with a localized heading.
//! The locale comes from the first path segment, which the locale middleware
//! has already checked; the handlers check again because excluded paths such
//! as `/auth` also match `/{locale}`.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use crate::http::middleware::ResolvedLocale;
use crate::http::server::AppState;
use crate::i18n::{Locale, PageStrings};

/// The placeholder pages served under every locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Browse,
    Search,
    Providers,
    Supporters,
    Donate,
    Dashboard,
    Login,
    Signup,
}

impl Page {
    pub const NAV: [Page; 5] = [
        Page::Browse,
        Page::Search,
        Page::Providers,
        Page::Supporters,
        Page::Donate,
    ];

    /// Path below the locale prefix (empty for the home page).
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Browse => "browse",
            Page::Search => "search",
            Page::Providers => "providers",
            Page::Supporters => "supporters",
            Page::Donate => "donate",
            Page::Dashboard => "dashboard",
            Page::Login => "login",
            Page::Signup => "signup",
        }
    }

    pub fn heading(self, strings: &PageStrings) -> &'static str {
        match self {
            Page::Home => strings.home,
            Page::Browse => strings.browse,
            Page::Search => strings.search,
            Page::Providers => strings.providers,
            Page::Supporters => strings.supporters,
            Page::Donate => strings.donate,
            Page::Dashboard => strings.dashboard,
            Page::Login => strings.login,
            Page::Signup => strings.signup,
        }
    }

    pub fn href(self, locale: &Locale) -> String {
        match self.slug() {
            "" => format!("/{locale}"),
            slug => format!("/{locale}/{slug}"),
        }
    }
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/{locale}", get(home))
        .route("/{locale}/browse", get(browse))
        .route("/{locale}/search", get(search))
        .route("/{locale}/providers", get(providers))
        .route("/{locale}/supporters", get(supporters))
        .route("/{locale}/donate", get(donate))
        .route("/{locale}/dashboard", get(dashboard))
        .route("/{locale}/login", get(login))
        .route("/{locale}/signup", get(signup))
        .route("/auth/callback", get(auth_callback))
}

async fn home(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Home)
}

async fn browse(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Browse)
}

async fn search(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Search)
}

async fn providers(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Providers)
}

async fn supporters(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Supporters)
}

async fn donate(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Donate)
}

async fn dashboard(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Dashboard)
}

async fn login(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Login)
}

async fn signup(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    render_page(&state, &locale, Page::Signup)
}

/// Landing point after the external auth provider signs a user in.
async fn auth_callback(State(state): State<AppState>) -> Redirect {
    let locale = state.locales.default_locale();
    Redirect::temporary(&Page::Dashboard.href(locale))
}

/// Fallback for unmatched paths, localized when the path had a locale.
pub async fn not_found(State(state): State<AppState>, req: Request) -> Response {
    let locale = req
        .extensions()
        .get::<ResolvedLocale>()
        .map(|ResolvedLocale(locale)| locale)
        .unwrap_or_else(|| state.locales.default_locale());

    not_found_page(&state, locale)
}

fn render_page(state: &AppState, code: &str, page: Page) -> Response {
    match state.locales.locales().get(code) {
        Some(locale) => {
            let strings = PageStrings::for_locale(locale.as_str());
            Html(layout(state, locale, page.heading(strings), strings.coming_soon)).into_response()
        }
        None => not_found_page(state, state.locales.default_locale()),
    }
}

fn not_found_page(state: &AppState, locale: &Locale) -> Response {
    let strings = PageStrings::for_locale(locale.as_str());
    (
        StatusCode::NOT_FOUND,
        Html(layout(state, locale, strings.not_found, "")),
    )
        .into_response()
}

fn layout(state: &AppState, locale: &Locale, heading: &str, body: &str) -> String {
    let strings = PageStrings::for_locale(locale.as_str());

    let nav: String = Page::NAV
        .iter()
        .map(|page| {
            format!(
                r#"<a href="{}">{}</a>"#,
                page.href(locale),
                page.heading(strings)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let switcher: String = state
        .locales
        .locales()
        .iter()
        .map(|l| format!(r#"<a href="/{l}" hreflang="{l}">{l}</a>"#))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head><meta charset="utf-8"><title>{heading} | {site}</title></head>
<body>
<header><a href="/{locale}">{site}</a> <nav>{nav}</nav> <nav>{switcher}</nav></header>
<main><h1>{heading}</h1><p>{body}</p></main>
</body>
</html>
"#,
        site = strings.site_name,
    )
}
