//! Decoding of delivery API responses.
//!
//! The delivery API reports failures as a JSON payload (`{"error": "Field
//! token is required"}`) with the occasional plain-text body from its CDN
//! edge; rate limiting arrives as a 429 with an advisory `Retry-After`.
//! Everything funnels through [`decode`] so the fetch paths deal only in
//! typed envelopes and [`CmsError`].

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CmsError;

/// Wait applied when a 429 carries no readable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Turn a delivery API response into `T`, or the matching [`CmsError`].
///
/// Status is checked before the body is touched: 429 maps to
/// [`CmsError::RateLimited`], any other non-success to [`CmsError::Api`]
/// with whatever message the API sent. A success body that fails to
/// deserialize is [`CmsError::Parse`].
pub(crate) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CmsError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(CmsError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }

    let body = resp.text().await?;
    if !status.is_success() {
        return Err(CmsError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    serde_json::from_str(&body).map_err(|e| CmsError::Parse(e.to_string()))
}

fn retry_after_secs(resp: &Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Pull the message out of the API's `{"error": ...}` payload; anything
/// else (CDN edge pages, empty bodies) passes through as-is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|payload| {
            payload
                .get("error")
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
