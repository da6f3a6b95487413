//! General site configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default announcement cache lifetime in seconds.
const fn default_announcement_ttl_secs() -> u64 {
    60
}

/// Default content-cache setting.
const fn default_content_cache() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Public base URL of the site (used in notification emails).
    #[serde(default)]
    pub site_url: String,

    /// Whether the CMS client keeps its best-effort in-memory response cache.
    #[serde(default = "default_content_cache")]
    pub content_cache: bool,

    /// Lifetime of the cached announcement response, in seconds.
    #[serde(default = "default_announcement_ttl_secs")]
    pub announcement_ttl_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            content_cache: default_content_cache(),
            announcement_ttl_secs: default_announcement_ttl_secs(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.site_url.is_empty()
            && !self.site_url.starts_with("http://")
            && !self.site_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "general.site_url".into(),
                reason: format!("expected an http(s) URL, got `{}`", self.site_url),
            });
        }
        Ok(())
    }
}
