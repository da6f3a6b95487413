use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A news article teaser, normalized for list views and the home page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    /// Full slug relative to the site root (`news/my-article`).
    pub slug: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub image: Option<String>,
}
