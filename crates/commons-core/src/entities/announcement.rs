use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The home-page announcement banner.
///
/// `image` is serialized as an explicit `null` when no announcement is
/// published so the renderer can distinguish "checked, none" from a missing
/// field; `alt` is omitted entirely when there is no image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Announcement {
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Announcement {
    /// The empty "no announcement" value.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            image: None,
            alt: None,
        }
    }
}
