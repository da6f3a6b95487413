//! Gallery normalizer.
//!
//! Gallery content comes in two shapes: standalone photo stories with a
//! direct `image` asset, and album stories whose photos sit in a nested
//! block list (`images`, or legacy albums using `body`). Both flatten into
//! one [`GalleryImage`] per photo, in story order.

use commons_core::entities::{GalleryImage, Story};
use serde_json::Value;

use crate::fields::{image_alt, image_url, opt_str_field, str_field};
use crate::{CmsClient, StoryQuery};

/// Nested block fields holding album photos, in lookup order.
const ALBUM_FIELDS: [&str; 2] = ["images", "body"];

/// Flatten gallery stories into a list of images.
///
/// `category` filters case-insensitively when given; the result is capped
/// to `cap` entries. Items without an image file are skipped.
#[must_use]
pub fn gallery_images(stories: &[Story], category: Option<&str>, cap: usize) -> Vec<GalleryImage> {
    let mut images = Vec::new();
    for story in stories {
        collect_story_images(story, &mut images);
    }
    if let Some(category) = category {
        images.retain(|image| image.category.eq_ignore_ascii_case(category));
    }
    images.truncate(cap);
    images
}

fn collect_story_images(story: &Story, out: &mut Vec<GalleryImage>) {
    let content = &story.content;
    let story_category = str_field(content, "category");

    if let Some(src) = image_url(content.get("image")) {
        out.push(GalleryImage {
            id: story.uuid.clone(),
            src,
            alt: image_alt(content.get("image"))
                .or_else(|| opt_str_field(content, "alt"))
                .unwrap_or_default(),
            caption: str_field(content, "caption"),
            category: story_category.clone(),
        });
    }

    for field in ALBUM_FIELDS {
        let Some(items) = content.get(field).and_then(Value::as_array) else {
            continue;
        };
        for (idx, item) in items.iter().enumerate() {
            let Some(src) = item_image(item) else { continue };
            out.push(GalleryImage {
                id: item_id(item, story, idx),
                src,
                alt: item_alt(item).unwrap_or_default(),
                caption: str_field(item, "caption"),
                category: opt_str_field(item, "category")
                    .unwrap_or_else(|| story_category.clone()),
            });
        }
    }
}

/// An album item is either an asset (`{ filename }`) or a block wrapping
/// one (`{ image: { filename } }`).
fn item_image(item: &Value) -> Option<String> {
    image_url(Some(item)).or_else(|| image_url(item.get("image")))
}

fn item_alt(item: &Value) -> Option<String> {
    image_alt(Some(item)).or_else(|| image_alt(item.get("image")))
}

fn item_id(item: &Value, story: &Story, idx: usize) -> String {
    item.get("_uid")
        .and_then(Value::as_str)
        .map_or_else(|| format!("{}-{idx}", story.uuid), ToString::to_string)
}

impl CmsClient {
    /// All gallery images under `gallery/`, flattened and capped.
    pub async fn gallery_images(&self, category: Option<&str>, cap: usize) -> Vec<GalleryImage> {
        let query = StoryQuery::new().starts_with("gallery/").per_page(100);
        let stories = self.list_stories(&query).await;
        gallery_images(&stories, category, cap)
    }
}
