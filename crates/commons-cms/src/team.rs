//! Team listing normalizer.

use commons_core::entities::{Story, TeamMember};

use crate::fields::{i64_field, image_url, opt_str_field, str_field};
use crate::{CmsClient, StoryQuery};

/// Normalize team stories into the board/staff listing.
///
/// Sorted by the editor-controlled `order` field; members without one sink
/// to the end, ties break by name.
#[must_use]
pub fn team_members(stories: &[Story]) -> Vec<TeamMember> {
    let mut members: Vec<TeamMember> = stories.iter().map(to_member).collect();
    members.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    members
}

fn to_member(story: &Story) -> TeamMember {
    let content = &story.content;
    TeamMember {
        id: story.uuid.clone(),
        name: opt_str_field(content, "name").unwrap_or_else(|| story.name.clone()),
        role: str_field(content, "role"),
        bio: str_field(content, "bio"),
        photo: image_url(content.get("photo")).or_else(|| image_url(content.get("image"))),
        order: i64_field(content, "order", i64::MAX),
    }
}

impl CmsClient {
    /// Board and staff members from the `team/` section, in display order.
    pub async fn team_members(&self) -> Vec<TeamMember> {
        let query = StoryQuery::new()
            .starts_with("team/")
            .content_type("team_member")
            .per_page(100);
        let stories = self.list_stories(&query).await;
        team_members(&stories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn member_story(uuid: &str, content: serde_json::Value) -> Story {
        serde_json::from_value(json!({
            "id": 1,
            "uuid": uuid,
            "name": uuid,
            "slug": uuid,
            "full_slug": format!("team/{uuid}"),
            "content": content
        }))
        .unwrap()
    }

    #[test]
    fn ordered_members_first_then_name_ties() {
        let stories = vec![
            member_story("d", json!({ "name": "Dana" })),
            member_story("a", json!({ "name": "Alex", "order": 2 })),
            member_story("c", json!({ "name": "Casey" })),
            member_story("b", json!({ "name": "Bo", "order": 1 })),
        ];

        let members = team_members(&stories);
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Bo", "Alex", "Casey", "Dana"]);
    }

    #[test]
    fn order_typed_as_text_still_sorts() {
        let stories = vec![
            member_story("a", json!({ "name": "Alex", "order": "10" })),
            member_story("b", json!({ "name": "Bo", "order": 2 })),
        ];

        let members = team_members(&stories);
        assert_eq!(members[0].name, "Bo");
        assert_eq!(members[1].order, 10);
    }

    #[test]
    fn photo_falls_back_to_image_field() {
        let stories = vec![member_story(
            "a",
            json!({
                "name": "Alex",
                "role": "Chair",
                "bio": "Founding member.",
                "image": { "filename": "https://a.example/f/alex.jpg" }
            }),
        )];

        let members = team_members(&stories);
        assert_eq!(
            members[0].photo.as_deref(),
            Some("https://a.example/f/alex.jpg")
        );
        assert_eq!(members[0].role, "Chair");
    }
}
