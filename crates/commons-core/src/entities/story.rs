use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw content entry as delivered by the CMS.
///
/// The envelope fields are fixed; `content` is an opaque tree whose shape is
/// decided by editors in the CMS content model, discriminated by a
/// `component` field. Stories are read-only here — identity is
/// (space, `full_slug`) and all mutation happens in the CMS.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Story {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub slug: String,
    pub full_slug: String,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    /// The `component` discriminator of the content body, if present.
    #[must_use]
    pub fn component(&self) -> Option<&str> {
        self.content.get("component").and_then(|v| v.as_str())
    }

    /// Top-level path segment of the slug (`news/my-article` → `news`).
    #[must_use]
    pub fn kind(&self) -> &str {
        self.full_slug.split('/').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn component_and_kind_from_story() {
        let story: Story = serde_json::from_value(json!({
            "id": 42,
            "uuid": "a5ab0b14-0c44-4a1d-b936-7b6c4f1c9d42",
            "name": "My Article",
            "slug": "my-article",
            "full_slug": "news/my-article",
            "content": { "component": "news_article", "title": "My Article" }
        }))
        .unwrap();

        assert_eq!(story.component(), Some("news_article"));
        assert_eq!(story.kind(), "news");
    }

    #[test]
    fn missing_content_defaults_to_null() {
        let story: Story = serde_json::from_value(json!({
            "id": 7,
            "uuid": "u",
            "name": "Home",
            "slug": "home",
            "full_slug": "home"
        }))
        .unwrap();

        assert!(story.content.is_null());
        assert_eq!(story.component(), None);
        assert_eq!(story.kind(), "home");
    }
}
