use std::time::Duration;

use commons_cms::{CmsClient, CmsError, StoryQuery};
use commons_config::{CmsConfig, ContentVersion};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> CmsConfig {
    CmsConfig {
        token: "pub-token".to_string(),
        preview_token: "prev-token".to_string(),
        ..Default::default()
    }
}

fn client(server: &MockServer) -> CmsClient {
    CmsClient::new(&test_config()).with_base_url(server.uri())
}

fn story_body(full_slug: &str, content: serde_json::Value) -> serde_json::Value {
    json!({
        "story": {
            "id": 1,
            "uuid": format!("uuid-{}", full_slug.replace('/', "-")),
            "name": full_slug,
            "slug": full_slug.rsplit('/').next().unwrap(),
            "full_slug": full_slug,
            "content": content
        },
        "cv": 1767225600
    })
}

// ── Request construction ────────────────────────────────────────

#[tokio::test]
async fn fetch_story_sends_token_version_and_cv() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/about"))
        .and(query_param("version", "published"))
        .and(query_param("token", "pub-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(story_body("about", json!({ "component": "page" }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let story = client
        .fetch_story("about", &StoryQuery::new())
        .await
        .unwrap();
    assert_eq!(story.full_slug, "about");
    assert_eq!(story.component(), Some("page"));

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap().to_string();
    assert!(query.contains(&format!("cv={}", client.cv())));
}

#[tokio::test]
async fn draft_requests_use_the_preview_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/about"))
        .and(query_param("version", "draft"))
        .and(query_param("token", "prev-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(story_body("about", json!({}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let query = StoryQuery::new().version(ContentVersion::Draft);
    client.fetch_story("about", &query).await.unwrap();
}

#[tokio::test]
async fn slug_slashes_are_trimmed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/news/my-article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(story_body("news/my-article", json!({}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let story = client
        .fetch_story("/news/my-article/", &StoryQuery::new())
        .await
        .unwrap();
    assert_eq!(story.full_slug, "news/my-article");
}

#[tokio::test]
async fn list_parameters_are_forwarded_and_capped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories"))
        .and(query_param("starts_with", "events/"))
        .and(query_param("content_type", "event"))
        .and(query_param("sort_by", "content.date:asc"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stories": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let query = StoryQuery::new()
        .starts_with("events/")
        .content_type("event")
        .sort_by("content.date:asc")
        .per_page(250)
        .page(2);
    let stories = client.fetch_stories(&query).await.unwrap();
    assert!(stories.is_empty());
}

// ── Error mapping ───────────────────────────────────────────────

#[tokio::test]
async fn not_found_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .fetch_story("missing", &StoryQuery::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // The lenient getter flattens the same failure to None.
    assert!(client.get_story("missing", &StoryQuery::new()).await.is_none());
}

#[tokio::test]
async fn rate_limit_surfaces_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.fetch_stories(&StoryQuery::new()).await.unwrap_err();
    assert!(matches!(
        err,
        CmsError::RateLimited {
            retry_after_secs: 30
        }
    ));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/about"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .fetch_story("about", &StoryQuery::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CmsError::Parse(_)));
}

#[tokio::test]
async fn api_error_message_comes_from_the_json_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/about"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "Field token is required" })),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .fetch_story("about", &StoryQuery::new())
        .await
        .unwrap_err();
    match err {
        CmsError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Field token is required");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_degrades_to_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client(&server);
    let query = StoryQuery::new().starts_with("events/");
    assert!(client.list_stories(&query).await.is_empty());
}

// ── Response cache ──────────────────────────────────────────────

#[tokio::test]
async fn cached_story_skips_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/home"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(story_body("home", json!({ "component": "page" }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).with_cache();
    let first = client.fetch_story("home", &StoryQuery::new()).await.unwrap();
    let second = client.fetch_story("home", &StoryQuery::new()).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn invalidated_path_is_refetched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/news/my-article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(story_body("news/my-article", json!({}))),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server).with_cache();
    client
        .fetch_story("news/my-article", &StoryQuery::new())
        .await
        .unwrap();

    assert_eq!(client.invalidate_path("news/my-article"), 1);

    client
        .fetch_story("news/my-article", &StoryQuery::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn kind_tag_invalidation_drops_lists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories"))
        .and(query_param("starts_with", "news/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stories": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server).with_cache();
    let query = StoryQuery::new().starts_with("news/");
    client.fetch_stories(&query).await.unwrap();

    assert_eq!(client.invalidate_tag("news"), 1);

    client.fetch_stories(&query).await.unwrap();
}

#[tokio::test]
async fn expired_ttl_entries_are_refetched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/announcement"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(story_body("announcement", json!({}))),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server).with_cache();
    let query = StoryQuery::new().cache_ttl(Duration::ZERO);
    client.fetch_story("announcement", &query).await.unwrap();
    client.fetch_story("announcement", &query).await.unwrap();
}

#[tokio::test]
async fn bust_changes_the_cv_sent_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cdn/stories/home"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(story_body("home", json!({}))),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    client.fetch_story("home", &StoryQuery::new()).await.unwrap();
    client.bust();
    client.fetch_story("home", &StoryQuery::new()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let last_query = requests.last().unwrap().url.query().unwrap();
    assert!(last_query.contains(&format!("cv={}", client.cv())));
}
