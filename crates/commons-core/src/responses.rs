//! JSON response envelopes returned by the HTTP API.
//!
//! These structs define the exact wire shape of every endpoint under `/api`.
//! The announcement endpoint returns the bare [`Announcement`] record rather
//! than an envelope, so it has no wrapper here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Event, GalleryImage, NewsItem, Story, TeamMember};

/// Response from `GET /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// Response from `GET /api/gallery`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GalleryResponse {
    pub images: Vec<GalleryImage>,
}

/// Response from `GET /api/news`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewsResponse {
    pub news: Vec<NewsItem>,
}

/// Response from `GET /api/team`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamResponse {
    pub members: Vec<TeamMember>,
}

/// Response from `GET /api/pages/{path}` — the raw story for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PageResponse {
    pub story: Story,
}

/// Response from both revalidation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RevalidateResponse {
    pub revalidated: bool,
    /// Unix epoch milliseconds at the time the invalidation ran.
    pub now: i64,
    pub slug: Option<String>,
}

/// Response from the form submission endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormResponse {
    pub sent: bool,
}

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body for every non-2xx JSON response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}
