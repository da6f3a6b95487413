//! # commons-server
//!
//! HTTP API for the commons site backend.
//!
//! The router serves the normalized content listings the site renders
//! (events, gallery, news, team, the announcement banner), raw pages for
//! the renderer, the CMS publish webhook, and the contact/membership form
//! endpoints. All state is built once at startup and injected; handlers
//! hold no globals.
//!
//! Content endpoints never fail on upstream trouble: a CMS outage degrades
//! them to empty listings with HTTP 200 (the lenient-getter contract in
//! `commons-cms`). Only the revalidation endpoints (401), the form
//! endpoints (400/502/503), and unknown pages (404) return error statuses.

mod error;
mod routes;

pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use commons_cms::CmsClient;
use commons_config::SiteConfig;
use commons_mail::Mailer;

/// Shared per-process state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub cms: Arc<CmsClient>,
    /// `None` when SMTP is not configured; the form endpoints then answer
    /// 503 instead of silently dropping submissions.
    pub mailer: Option<Arc<Mailer>>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(cms: CmsClient, mailer: Option<Mailer>, config: SiteConfig) -> Self {
        Self {
            cms: Arc::new(cms),
            mailer: mailer.map(Arc::new),
            config: Arc::new(config),
        }
    }
}

/// Build the HTTP API router with the given application state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::content::health))
        .route("/api/events", get(routes::content::events))
        .route("/api/gallery", get(routes::content::gallery))
        .route("/api/news", get(routes::content::news))
        .route("/api/team", get(routes::content::team))
        .route("/api/announcement", get(routes::content::announcement))
        .route("/api/pages/{*path}", get(routes::content::page))
        .route(
            "/api/revalidate",
            post(routes::revalidate::webhook).get(routes::revalidate::manual),
        )
        .route("/api/contact", post(routes::forms::contact))
        .route("/api/membership", post(routes::forms::membership))
        .with_state(state)
}
