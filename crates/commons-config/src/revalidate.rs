//! Revalidation shared secrets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RevalidateConfig {
    /// Shared secret presented by the CMS publish webhook. Empty = unset;
    /// the webhook endpoint then accepts any caller (fail-open, preserved
    /// behavior of the original deployment).
    #[serde(default)]
    pub webhook_secret: String,

    /// Shared secret for the manual `GET /api/revalidate` variant.
    #[serde(default)]
    pub manual_secret: String,
}

impl RevalidateConfig {
    /// The webhook secret as an optional value (empty string = unset).
    #[must_use]
    pub fn webhook_secret(&self) -> Option<&str> {
        if self.webhook_secret.is_empty() {
            None
        } else {
            Some(&self.webhook_secret)
        }
    }

    /// The manual secret as an optional value (empty string = unset).
    #[must_use]
    pub fn manual_secret(&self) -> Option<&str> {
        if self.manual_secret.is_empty() {
            None
        } else {
            Some(&self.manual_secret)
        }
    }
}
