//! CMS content-delivery configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default CMS region.
fn default_region() -> String {
    String::from("eu")
}

/// Default content version served to the site.
fn default_version() -> String {
    String::from("published")
}

/// Content version selector: live content vs. unpublished editor preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentVersion {
    Published,
    Draft,
}

impl ContentVersion {
    /// The query-parameter value the delivery API expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CmsConfig {
    /// Public access token for published content.
    #[serde(default)]
    pub token: String,

    /// Preview access token for draft content (editor preview deploys).
    #[serde(default)]
    pub preview_token: String,

    /// Hosting region of the CMS space: `us` or `eu`.
    #[serde(default = "default_region")]
    pub region: String,

    /// Content version served by default: `published` or `draft`.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            preview_token: String::new(),
            region: default_region(),
            version: default_version(),
        }
    }
}

impl CmsConfig {
    /// Check if the CMS config has the minimum required fields.
    ///
    /// Either token qualifies: a preview-only space (editor preview
    /// deploys) still counts as configured, with published requests
    /// falling back to the preview token per [`Self::token_for`]. The
    /// server warns about that fallback at startup.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() || !self.preview_token.is_empty()
    }

    /// Content-delivery API base URL for the configured region.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        if self.region == "us" {
            String::from("https://api-us.storyblok.com/v2")
        } else {
            String::from("https://api.storyblok.com/v2")
        }
    }

    /// The configured default content version.
    ///
    /// Only valid after [`Self::validate`]; unknown values fall back to
    /// published.
    #[must_use]
    pub fn content_version(&self) -> ContentVersion {
        if self.version == "draft" {
            ContentVersion::Draft
        } else {
            ContentVersion::Published
        }
    }

    /// Access token for the given content version.
    ///
    /// Draft requests need the preview token; published requests use the
    /// public token. Falls back to whichever token is present so a space with
    /// a single token keeps working.
    #[must_use]
    pub fn token_for(&self, version: ContentVersion) -> &str {
        match version {
            ContentVersion::Draft if !self.preview_token.is_empty() => &self.preview_token,
            ContentVersion::Published if !self.token.is_empty() => &self.token,
            _ if !self.token.is_empty() => &self.token,
            _ => &self.preview_token,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.region != "us" && self.region != "eu" {
            return Err(ConfigError::InvalidValue {
                field: "cms.region".into(),
                reason: format!("expected `us` or `eu`, got `{}`", self.region),
            });
        }
        if self.version != "published" && self.version != "draft" {
            return Err(ConfigError::InvalidValue {
                field: "cms.version".into(),
                reason: format!("expected `published` or `draft`, got `{}`", self.version),
            });
        }
        Ok(())
    }
}
