//! Field extraction helpers for CMS content trees.
//!
//! Content bodies are editor-shaped JSON. These helpers coerce the handful
//! of recurring field forms (plain strings, asset objects, link objects, the
//! datepicker's `YYYY-MM-DD HH:MM`) into the types the normalizers emit,
//! defaulting to empty rather than failing so one malformed entry never
//! takes down a whole listing.

use chrono::NaiveDate;
use serde_json::Value;

/// A string field; missing or non-string values become empty.
#[must_use]
pub(crate) fn str_field(content: &Value, key: &str) -> String {
    content
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// A string field as an option; missing, non-string, or empty values are
/// `None`.
#[must_use]
pub(crate) fn opt_str_field(content: &Value, key: &str) -> Option<String> {
    content
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// A boolean field; anything other than `true` is `false`.
#[must_use]
pub(crate) fn bool_field(content: &Value, key: &str) -> bool {
    content.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// An integer field with a caller-supplied default.
#[must_use]
pub(crate) fn i64_field(content: &Value, key: &str, default: i64) -> i64 {
    match content.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
        // Editors sometimes type numbers into text fields.
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Extract an image URL from an asset value.
///
/// Asset fields arrive either as an asset object (`{ "filename": "...",
/// "alt": "..." }`) or, in older entries, as a bare URL string.
#[must_use]
pub(crate) fn image_url(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => map
            .get("filename")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string),
        _ => None,
    }
}

/// Alt text of an asset value, when the asset object carries one.
#[must_use]
pub(crate) fn image_alt(value: Option<&Value>) -> Option<String> {
    value?
        .get("alt")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Extract a URL from a link value (`{ "url": ... }`, `{ "cached_url": ...
/// }`, or a bare string).
#[must_use]
pub(crate) fn link_url(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => ["url", "cached_url"].iter().find_map(|key| {
            map.get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        }),
        _ => None,
    }
}

/// Parse the CMS datepicker formats: `YYYY-MM-DD HH:MM` or `YYYY-MM-DD`.
#[must_use]
pub(crate) fn parse_cms_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split_whitespace().next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn str_fields_default_to_empty() {
        let content = json!({ "title": "Hello", "count": 3 });
        assert_eq!(str_field(&content, "title"), "Hello");
        assert_eq!(str_field(&content, "missing"), "");
        assert_eq!(str_field(&content, "count"), "");
        assert_eq!(opt_str_field(&content, "title").as_deref(), Some("Hello"));
        assert_eq!(opt_str_field(&content, "missing"), None);
    }

    #[test]
    fn empty_string_is_absent_for_opt() {
        let content = json!({ "subtitle": "" });
        assert_eq!(opt_str_field(&content, "subtitle"), None);
    }

    #[test]
    fn image_url_accepts_asset_object_and_bare_string() {
        let asset = json!({ "filename": "https://a.example/f/1.jpg", "alt": "x" });
        assert_eq!(
            image_url(Some(&asset)).as_deref(),
            Some("https://a.example/f/1.jpg")
        );

        let bare = json!("https://a.example/f/2.jpg");
        assert_eq!(
            image_url(Some(&bare)).as_deref(),
            Some("https://a.example/f/2.jpg")
        );

        assert_eq!(image_url(Some(&json!({ "filename": "" }))), None);
        assert_eq!(image_url(Some(&json!(42))), None);
        assert_eq!(image_url(None), None);
    }

    #[test]
    fn image_alt_only_from_asset_objects() {
        let asset = json!({ "filename": "f.jpg", "alt": "A banner" });
        assert_eq!(image_alt(Some(&asset)).as_deref(), Some("A banner"));
        assert_eq!(image_alt(Some(&json!({ "filename": "f.jpg" }))), None);
        assert_eq!(image_alt(Some(&json!("f.jpg"))), None);
    }

    #[test]
    fn link_url_prefers_url_over_cached_url() {
        let link = json!({ "url": "https://x.example", "cached_url": "stale" });
        assert_eq!(link_url(Some(&link)).as_deref(), Some("https://x.example"));

        let cached_only = json!({ "url": "", "cached_url": "events/picnic" });
        assert_eq!(link_url(Some(&cached_only)).as_deref(), Some("events/picnic"));
    }

    #[rstest]
    #[case("2026-06-01 18:30", Some((2026, 6, 1)))]
    #[case("2026-06-01", Some((2026, 6, 1)))]
    #[case("2026-13-01", None)]
    #[case("", None)]
    #[case("June 1st", None)]
    fn datepicker_formats_parse(#[case] raw: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(parse_cms_date(raw), expected);
    }

    #[test]
    fn numeric_text_fields_coerce() {
        let content = json!({ "order": "7", "broken": "seven" });
        assert_eq!(i64_field(&content, "order", 99), 7);
        assert_eq!(i64_field(&content, "broken", 99), 99);
        assert_eq!(i64_field(&content, "missing", 99), 99);
        assert!(!bool_field(&content, "missing"));
    }
}
