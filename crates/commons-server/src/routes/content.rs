//! Read-only content endpoints.
//!
//! Every listing here follows the degrade-to-empty contract: if the CMS is
//! unreachable the handler answers 200 with an empty collection (or a null
//! announcement) and the page renders as "no content". Only the raw page
//! endpoint distinguishes absence, because the renderer needs the 404.

use std::time::Duration;

use axum::Json;
use axum::extract::{Path, Query, State};
use commons_cms::StoryQuery;
use commons_core::entities::Announcement;
use commons_core::responses::{
    EventsResponse, GalleryResponse, HealthResponse, NewsResponse, PageResponse, TeamResponse,
};
use serde::Deserialize;

use crate::{ApiError, AppState};

/// Hard cap on the gallery listing, regardless of how many photos exist.
const GALLERY_CAP: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Optional cap on the number of entries returned.
    pub max: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GalleryParams {
    /// Optional case-insensitive category filter.
    pub category: Option<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/events` — upcoming events, soonest first.
pub async fn events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<EventsResponse> {
    let events = state.cms.upcoming_events(params.max).await;
    Json(EventsResponse { events })
}

/// `GET /api/gallery` — flattened gallery photos, capped at 50.
pub async fn gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> Json<GalleryResponse> {
    let images = state
        .cms
        .gallery_images(params.category.as_deref(), GALLERY_CAP)
        .await;
    Json(GalleryResponse { images })
}

/// `GET /api/news` — news teasers, newest first.
pub async fn news(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<NewsResponse> {
    let news = state.cms.latest_news(params.max).await;
    Json(NewsResponse { news })
}

/// `GET /api/team` — board and staff, in display order.
pub async fn team(State(state): State<AppState>) -> Json<TeamResponse> {
    let members = state.cms.team_members().await;
    Json(TeamResponse { members })
}

/// `GET /api/announcement` — the home-page banner.
///
/// The resolved response is cached for the configured TTL (60 s by
/// default), standing in for the hosting layer's revalidate interval.
pub async fn announcement(State(state): State<AppState>) -> Json<Announcement> {
    let ttl = Duration::from_secs(state.config.general.announcement_ttl_secs);
    Json(state.cms.announcement(ttl).await)
}

/// `GET /api/pages/{*path}` — raw story for the page renderer.
pub async fn page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<PageResponse>, ApiError> {
    state
        .cms
        .get_story(&path, &StoryQuery::new())
        .await
        .map(|story| Json(PageResponse { story }))
        .ok_or_else(|| ApiError::NotFound(format!("no page at '{path}'")))
}
