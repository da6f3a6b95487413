//! Cache revalidation endpoints.
//!
//! The CMS fires `POST /api/revalidate` on every publish; a manual GET
//! variant exists for operators. Both drop the affected entries from the
//! in-process content cache and bump the client's cache-busting value so
//! the delivery CDN re-reads published content.
//!
//! Authorization is a plain shared-secret compare. When no webhook secret
//! is configured the POST endpoint accepts any caller — fail-open,
//! preserved from the original deployment rather than fixed here.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use chrono::Utc;
use commons_core::responses::RevalidateResponse;
use serde::Deserialize;
use serde_json::Value;

use crate::{ApiError, AppState};

/// Header carrying the webhook shared secret.
const WEBHOOK_SECRET_HEADER: &str = "x-webhook-secret";

/// Content kinds aggregated on the home page; publishing one of these also
/// invalidates `home`.
const HOME_AGGREGATED_KINDS: [&str; 3] = ["news", "events", "gallery"];

/// Paths invalidated when a webhook arrives without a usable slug.
const WELL_KNOWN_PATHS: [&str; 7] = [
    "home",
    "events",
    "news",
    "gallery",
    "about",
    "membership",
    "contact",
];

#[derive(Debug, Deserialize)]
pub struct ManualParams {
    pub secret: Option<String>,
    pub path: Option<String>,
}

/// `POST /api/revalidate` — the CMS publish webhook.
///
/// A malformed body or missing slug is not an error; it falls back to
/// invalidating the well-known path set.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RevalidateResponse>, ApiError> {
    if let Some(secret) = state.config.revalidate.webhook_secret() {
        let presented = headers
            .get(WEBHOOK_SECRET_HEADER)
            .and_then(|v| v.to_str().ok());
        if presented != Some(secret) {
            return Err(ApiError::Unauthorized("invalid webhook secret".into()));
        }
    }

    let slug = webhook_slug(&body);
    Ok(Json(invalidate(&state, slug)))
}

/// `GET /api/revalidate?secret=&path=` — manual variant.
///
/// The presented secret must equal the configured one under `Option`
/// equality; two unset values compare equal, so an unconfigured deployment
/// accepts secretless requests.
pub async fn manual(
    State(state): State<AppState>,
    Query(params): Query<ManualParams>,
) -> Result<Json<RevalidateResponse>, ApiError> {
    if params.secret.as_deref() != state.config.revalidate.manual_secret() {
        return Err(ApiError::Unauthorized("invalid revalidation secret".into()));
    }

    let slug = params.path.filter(|p| !p.trim_matches('/').is_empty());
    Ok(Json(invalidate(&state, slug)))
}

/// Run the one-shot invalidation side effect and build the response.
fn invalidate(state: &AppState, slug: Option<String>) -> RevalidateResponse {
    let paths = target_paths(slug.as_deref());
    let mut dropped = 0;
    for path in &paths {
        dropped += state.cms.invalidate_path(path);
    }
    dropped += state.cms.invalidate_tag(commons_cms::CONTENT_TAG);
    let cv = state.cms.bust();
    tracing::info!(?slug, ?paths, dropped, cv, "content revalidated");

    RevalidateResponse {
        revalidated: true,
        now: Utc::now().timestamp_millis(),
        slug,
    }
}

/// Extract the published story's slug from the webhook payload.
///
/// The CMS sends `full_slug` at the top level on publish events; some hook
/// configurations nest the whole story instead.
fn webhook_slug(body: &[u8]) -> Option<String> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    payload
        .get("full_slug")
        .and_then(Value::as_str)
        .or_else(|| {
            payload
                .get("story")
                .and_then(|story| story.get("full_slug"))
                .and_then(Value::as_str)
        })
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The cache paths a slug invalidates.
fn target_paths(slug: Option<&str>) -> Vec<String> {
    let Some(slug) = slug else {
        return WELL_KNOWN_PATHS.iter().map(ToString::to_string).collect();
    };
    let slug = slug.trim_matches('/');
    let mut paths = vec![slug.to_string()];
    let kind = slug.split('/').next().unwrap_or_default();
    if HOME_AGGREGATED_KINDS.contains(&kind) {
        paths.push("home".to_string());
    }
    paths
}
