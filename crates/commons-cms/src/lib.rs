//! # commons-cms
//!
//! Content-delivery client and normalizers for the commons site backend.
//!
//! Talks to the headless CMS delivery API (read-only) and shapes
//! editor-driven content trees into the flat records the HTTP API serves:
//! - events (`events/*`, upcoming only)
//! - gallery images (flattened from nested image blocks)
//! - news teasers (`news/*`, newest first)
//! - team members (`team/*`, editor-ordered)
//! - the home-page announcement banner
//!
//! Fetching is split in two layers. The inner fetchers ([`CmsClient::fetch_story`],
//! [`CmsClient::fetch_stories`]) are fallible and return [`CmsError`]. The
//! public getters ([`CmsClient::get_story`], [`CmsClient::list_stories`]) are
//! lenient: they log failures and return `None`/empty, so a CMS outage
//! degrades pages to empty listings instead of erroring them. Callers that
//! need to distinguish "no content" from "upstream down" use the inner layer.

pub mod announcement;
pub mod events;
pub mod gallery;
pub mod news;
pub mod team;

mod cache;
mod error;
mod fields;
mod response;

pub use cache::{CONTENT_TAG, ContentCache, story_tag};
pub use error::CmsError;

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::Utc;
use commons_config::{CmsConfig, ContentVersion};
use commons_core::entities::Story;

// ── Wire envelopes ─────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct StoryEnvelope {
    story: Story,
}

#[derive(serde::Deserialize)]
struct StoriesEnvelope {
    stories: Vec<Story>,
}

// ── Query options ──────────────────────────────────────────────────

/// Options for a delivery API request.
///
/// All options are additive; an empty query fetches the configured default
/// content version with the API's own defaults.
#[derive(Debug, Clone, Default)]
pub struct StoryQuery {
    version: Option<ContentVersion>,
    starts_with: Option<String>,
    content_type: Option<String>,
    sort_by: Option<String>,
    per_page: Option<usize>,
    page: Option<usize>,
    cache_ttl: Option<Duration>,
}

impl StoryQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the configured content version for this request.
    #[must_use]
    pub const fn version(mut self, version: ContentVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Only return stories whose `full_slug` starts with `prefix`.
    #[must_use]
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    /// Only return stories whose content `component` matches.
    #[must_use]
    pub fn content_type(mut self, component: impl Into<String>) -> Self {
        self.content_type = Some(component.into());
        self
    }

    /// Sort key understood by the delivery API (e.g. `content.date:asc`).
    #[must_use]
    pub fn sort_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self
    }

    /// Page size, capped at the API maximum of 100.
    #[must_use]
    pub const fn per_page(mut self, n: usize) -> Self {
        self.per_page = Some(n);
        self
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Expire the cached response after `ttl`. Without this, cached entries
    /// live until tag invalidation.
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the CMS content-delivery API.
///
/// Construct once from [`CmsConfig`] and share by handle (`Arc`). The
/// client carries the cache-busting value `cv` as an atomic timestamp;
/// [`CmsClient::bust`] advances it so the delivery CDN re-reads published
/// content after a revalidation webhook.
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    config: CmsConfig,
    cv: AtomicI64,
    cache: Option<ContentCache>,
}

impl CmsClient {
    /// Create a client for the configured space.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("commons-site/0.1")
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base_url: config.api_base_url(),
            config: config.clone(),
            cv: AtomicI64::new(Utc::now().timestamp_millis()),
            cache: None,
        }
    }

    /// Enable the in-memory response cache.
    #[must_use]
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(ContentCache::new());
        self
    }

    /// Point the client at a different API base URL (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Current cache-busting value.
    #[must_use]
    pub fn cv(&self) -> i64 {
        self.cv.load(Ordering::Relaxed)
    }

    /// Advance the cache-busting value to now. Returns the new value.
    pub fn bust(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.cv.store(now, Ordering::Relaxed);
        now
    }

    /// Drop cached responses for one story path. Returns entries removed.
    pub fn invalidate_path(&self, path: &str) -> usize {
        self.cache.as_ref().map_or(0, |c| c.invalidate_path(path))
    }

    /// Drop cached responses carrying `tag`. Returns entries removed.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        self.cache.as_ref().map_or(0, |c| c.invalidate_tag(tag))
    }

    /// Fetch a single story by its full slug.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError`] if the HTTP request fails, the API returns a
    /// non-success status (404 included), or the response cannot be parsed.
    pub async fn fetch_story(
        &self,
        full_slug: &str,
        query: &StoryQuery,
    ) -> Result<Story, CmsError> {
        let slug = full_slug.trim_matches('/');
        let version = self.version_for(query);
        let cache_key = format!("stories/{slug}?version={}", version.as_str());

        if let Some(story) = self.cached(&cache_key) {
            return Ok(story);
        }

        let encoded_slug = slug
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let url = format!(
            "{}/cdn/stories/{encoded_slug}?version={}&token={}&cv={}",
            self.base_url,
            version.as_str(),
            urlencoding::encode(self.config.token_for(version)),
            self.cv(),
        );

        let envelope: StoryEnvelope =
            response::decode(self.http.get(&url).send().await?).await?;

        let mut tags = vec![CONTENT_TAG.to_string(), story_tag(slug)];
        tags.extend(kind_tag(slug));
        self.store(&cache_key, &envelope.story, tags, query.cache_ttl);
        Ok(envelope.story)
    }

    /// Fetch a list of stories matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_stories(&self, query: &StoryQuery) -> Result<Vec<Story>, CmsError> {
        let version = self.version_for(query);
        let params = list_params(query, version);
        let cache_key = format!("stories?{params}");

        if let Some(stories) = self.cached(&cache_key) {
            return Ok(stories);
        }

        let url = format!(
            "{}/cdn/stories?{params}&token={}&cv={}",
            self.base_url,
            urlencoding::encode(self.config.token_for(version)),
            self.cv(),
        );

        let envelope: StoriesEnvelope =
            response::decode(self.http.get(&url).send().await?).await?;

        let mut tags = vec![CONTENT_TAG.to_string()];
        tags.extend(query.starts_with.as_deref().and_then(kind_tag));
        self.store(&cache_key, &envelope.stories, tags, query.cache_ttl);
        Ok(envelope.stories)
    }

    /// Fetch a story, treating every failure as "no content".
    ///
    /// Not-found is logged at debug (routine for optional singletons like
    /// the announcement); transport and API failures are logged at warn.
    pub async fn get_story(&self, full_slug: &str, query: &StoryQuery) -> Option<Story> {
        match self.fetch_story(full_slug, query).await {
            Ok(story) => Some(story),
            Err(e) if e.is_not_found() => {
                tracing::debug!(full_slug, "story not found");
                None
            }
            Err(e) => {
                tracing::warn!(full_slug, %e, "story fetch failed");
                None
            }
        }
    }

    /// Fetch a story list, treating every failure as an empty list.
    pub async fn list_stories(&self, query: &StoryQuery) -> Vec<Story> {
        self.fetch_stories(query).await.unwrap_or_else(|e| {
            let prefix = query.starts_with.as_deref().unwrap_or_default();
            tracing::warn!(prefix, %e, "story list fetch failed");
            Vec::new()
        })
    }

    fn version_for(&self, query: &StoryQuery) -> ContentVersion {
        query
            .version
            .unwrap_or_else(|| self.config.content_version())
    }

    fn cached<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.cache.as_ref()?.get(key)?;
        serde_json::from_value(value).ok()
    }

    fn store<T: serde::Serialize>(
        &self,
        key: &str,
        value: &T,
        tags: Vec<String>,
        ttl: Option<Duration>,
    ) {
        let Some(cache) = &self.cache else { return };
        if let Ok(value) = serde_json::to_value(value) {
            cache.insert(key, value, tags, ttl);
        }
    }
}

/// Canonical query string for a list request, without the credential and
/// cache-busting parameters. Doubles as the cache key so a `cv` bump
/// replaces entries instead of orphaning them.
fn list_params(query: &StoryQuery, version: ContentVersion) -> String {
    let mut params = vec![format!("version={}", version.as_str())];
    if let Some(prefix) = &query.starts_with {
        params.push(format!("starts_with={}", urlencoding::encode(prefix)));
    }
    if let Some(component) = &query.content_type {
        params.push(format!("content_type={}", urlencoding::encode(component)));
    }
    if let Some(key) = &query.sort_by {
        params.push(format!("sort_by={}", urlencoding::encode(key)));
    }
    if let Some(n) = query.per_page {
        params.push(format!("per_page={}", n.min(100)));
    }
    if let Some(page) = query.page {
        params.push(format!("page={page}"));
    }
    params.join("&")
}

/// Top-level path segment as a cache tag (`news/my-article` → `news`).
fn kind_tag(slug_or_prefix: &str) -> Option<String> {
    let kind = slug_or_prefix
        .trim_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    (!kind.is_empty()).then(|| kind.to_string())
}
