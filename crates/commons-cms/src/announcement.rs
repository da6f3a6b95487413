//! Home-page announcement resolution.
//!
//! The announcement banner lives in a singleton story whose content model
//! has drifted over time: the image may sit directly on the body, inside
//! one of several known block-list fields, or inside some newer list field
//! this code has never heard of. The resolver walks those shapes in a
//! fixed order; the order is part of the contract, since editors rely on a
//! direct image overriding whatever blocks still linger below it.

use std::time::Duration;

use commons_core::entities::{Announcement, Story};
use serde_json::Value;

use crate::{CmsClient, StoryQuery};

/// Alt text used when the announcement asset has none.
const DEFAULT_ALT: &str = "Special Announcement";

/// Block-list fields checked for an announcement image, in order.
const CANDIDATE_BLOCK_FIELDS: [&str; 5] = [
    "announcement_block",
    "Announcement_Block",
    "body",
    "items",
    "blocks",
];

/// Resolve the announcement banner from the `announcement` singleton.
///
/// Resolution order, first match wins:
/// 1. a direct `image` asset on the content body;
/// 2. the candidate block-list fields above, scanning each list for its
///    first image-bearing item (image-less leading items are skipped);
/// 3. any other list-valued field, checking only its first element;
/// 4. no image.
///
/// An absent story or content body resolves to "no banner", never an
/// error.
#[must_use]
pub fn resolve(story: Option<&Story>) -> Announcement {
    let Some(map) = story.and_then(|s| s.content.as_object()) else {
        return Announcement::none();
    };

    if let Some(announcement) = asset_image(map.get("image")) {
        return announcement;
    }

    for field in CANDIDATE_BLOCK_FIELDS {
        let Some(items) = map.get(field).and_then(Value::as_array) else {
            continue;
        };
        if let Some(announcement) = items.iter().find_map(item_image) {
            return announcement;
        }
    }

    for (key, value) in map {
        // Candidate lists were already scanned in full above.
        if CANDIDATE_BLOCK_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let Some(items) = value.as_array() else { continue };
        if let Some(announcement) = items.first().and_then(item_image) {
            return announcement;
        }
    }

    Announcement::none()
}

fn item_image(item: &Value) -> Option<Announcement> {
    asset_image(item.get("image"))
}

/// The `filename` of an image asset, with its `alt` as alt text. Empty
/// filenames count as absent.
fn asset_image(asset: Option<&Value>) -> Option<Announcement> {
    let asset = asset?;
    let filename = asset
        .get("filename")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())?;
    let alt = asset
        .get("alt")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ALT);
    Some(Announcement {
        image: Some(filename.to_string()),
        alt: Some(alt.to_string()),
    })
}

impl CmsClient {
    /// Resolve the current announcement banner.
    ///
    /// The response is cached for `ttl` so editors see banner changes
    /// within a minute without a webhook round-trip. A missing singleton
    /// resolves to the empty announcement.
    pub async fn announcement(&self, ttl: Duration) -> Announcement {
        let query = StoryQuery::new().cache_ttl(ttl);
        let story = self.get_story("announcement", &query).await;
        resolve(story.as_ref())
    }
}
