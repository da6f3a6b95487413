use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single photo in the community gallery.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub category: String,
}
