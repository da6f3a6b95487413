//! Best-effort in-memory response cache for the delivery client.
//!
//! Entries are keyed by the request they answer and carry tags so the
//! revalidation endpoints can drop them by story path, by content kind, or
//! all at once via the global content tag. The cache is not
//! correctness-relevant: every entry can be rebuilt from the CMS on the next
//! request, and a restart simply starts cold.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Tag carried by every cached entry; invalidating it empties the cache.
pub const CONTENT_TAG: &str = "content";

/// Tag scoping an entry to one story path.
#[must_use]
pub fn story_tag(full_slug: &str) -> String {
    format!("story:{}", full_slug.trim_matches('/'))
}

struct CachedEntry {
    value: serde_json::Value,
    tags: Vec<String>,
    expires_at: Option<Instant>,
}

impl CachedEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Tag- and TTL-aware in-memory cache.
#[derive(Default)]
pub struct ContentCache {
    entries: RwLock<HashMap<String, CachedEntry>>,
}

impl ContentCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached value. Expired entries report a miss.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if entry.is_expired(Instant::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Store a value under `key` with the given tags and optional lifetime.
    ///
    /// Inserting also prunes whatever has expired, so the map stays bounded
    /// by the set of distinct live requests.
    pub fn insert(
        &self,
        key: impl Into<String>,
        value: serde_json::Value,
        tags: Vec<String>,
        ttl: Option<Duration>,
    ) {
        let now = Instant::now();
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| !entry.is_expired(now));
        entries.insert(
            key.into(),
            CachedEntry {
                value,
                tags,
                expires_at: ttl.map(|ttl| now + ttl),
            },
        );
    }

    /// Drop every entry tagged with the given story path. Returns the number
    /// of entries removed.
    pub fn invalidate_path(&self, full_slug: &str) -> usize {
        self.invalidate_tag(&story_tag(full_slug))
    }

    /// Drop every entry carrying `tag`. Returns the number of entries removed.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        before - entries.len()
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of entries currently stored (expired ones included until the
    /// next insert prunes them).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
