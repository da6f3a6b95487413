//! News listing normalizer.

use commons_core::entities::{NewsItem, Story};

use crate::fields::{image_url, opt_str_field, parse_cms_date, str_field};
use crate::{CmsClient, StoryQuery};

/// Normalize news stories into teasers, newest first.
///
/// The article date comes from the content `date` field, falling back to
/// the CMS publish timestamp; entries with neither are skipped.
#[must_use]
pub fn latest_news(stories: &[Story], max: Option<usize>) -> Vec<NewsItem> {
    let mut items: Vec<NewsItem> = stories.iter().filter_map(to_news_item).collect();
    items.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(max) = max {
        items.truncate(max);
    }
    items
}

fn to_news_item(story: &Story) -> Option<NewsItem> {
    let content = &story.content;
    let date = parse_cms_date(&str_field(content, "date"))
        .or_else(|| story.published_at.map(|at| at.date_naive()))?;
    Some(NewsItem {
        id: story.uuid.clone(),
        title: opt_str_field(content, "title").unwrap_or_else(|| story.name.clone()),
        slug: story.full_slug.clone(),
        date,
        excerpt: opt_str_field(content, "excerpt")
            .or_else(|| opt_str_field(content, "intro"))
            .unwrap_or_default(),
        image: image_url(content.get("image")),
    })
}

impl CmsClient {
    /// Latest news teasers from the `news/` section, newest first.
    pub async fn latest_news(&self, max: Option<usize>) -> Vec<NewsItem> {
        let query = StoryQuery::new()
            .starts_with("news/")
            .content_type("news_article")
            .sort_by("content.date:desc")
            .per_page(100);
        let stories = self.list_stories(&query).await;
        latest_news(&stories, max)
    }
}
