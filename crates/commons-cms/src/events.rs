//! Events listing normalizer.

use chrono::{NaiveDate, Utc};
use commons_core::entities::{Event, Story};

use crate::fields::{bool_field, image_url, link_url, opt_str_field, parse_cms_date, str_field};
use crate::{CmsClient, StoryQuery};

/// Normalize event stories into the upcoming-events listing.
///
/// Entries without a parseable `date` are skipped. `today` is inclusive:
/// an event happening today still counts as upcoming. Results are sorted
/// ascending by date and capped to `max` when given.
#[must_use]
pub fn upcoming_events(stories: &[Story], today: NaiveDate, max: Option<usize>) -> Vec<Event> {
    let mut events: Vec<Event> = stories
        .iter()
        .filter_map(to_event)
        .filter(|event| event.date >= today)
        .collect();
    events.sort_by_key(|event| event.date);
    if let Some(max) = max {
        events.truncate(max);
    }
    events
}

fn to_event(story: &Story) -> Option<Event> {
    let content = &story.content;
    let date = parse_cms_date(&str_field(content, "date"))?;
    Some(Event {
        id: story.uuid.clone(),
        title: opt_str_field(content, "title").unwrap_or_else(|| story.name.clone()),
        date,
        time: str_field(content, "time"),
        location: str_field(content, "location"),
        description: str_field(content, "description"),
        image: image_url(content.get("image")),
        registration_link: link_url(content.get("registration_link")),
        featured: bool_field(content, "featured"),
    })
}

impl CmsClient {
    /// Upcoming events from the `events/` section, soonest first.
    ///
    /// Failures degrade to an empty listing via [`CmsClient::list_stories`].
    pub async fn upcoming_events(&self, max: Option<usize>) -> Vec<Event> {
        let query = StoryQuery::new()
            .starts_with("events/")
            .content_type("event")
            .sort_by("content.date:asc")
            .per_page(100);
        let stories = self.list_stories(&query).await;
        upcoming_events(&stories, Utc::now().date_naive(), max)
    }
}
