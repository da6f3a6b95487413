//! HTTP error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use commons_core::responses::ErrorResponse;
use thiserror::Error;

/// Errors a handler surfaces to the client as a JSON `{ message }` body.
///
/// Upstream CMS failures deliberately never appear here: content handlers
/// degrade to empty results instead of erroring.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or parameters failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// A revalidation secret was required and did not match.
    #[error("{0}")]
    Unauthorized(String),

    /// The requested page does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A user-initiated downstream send (notification email) failed.
    #[error("{0}")]
    BadGateway(String),

    /// The endpoint depends on something that is not configured.
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
