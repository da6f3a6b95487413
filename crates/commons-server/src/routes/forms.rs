//! Form submission endpoints.
//!
//! Unlike the content endpoints, failures here surface to the caller: a
//! form submission is user-initiated and the person submitting must learn
//! their message did not go out. Missing SMTP configuration answers 503,
//! a delivery failure answers 502, and a bad submitter address is the
//! caller's 400.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use commons_core::entities::{ContactSubmission, MembershipApplication};
use commons_core::responses::FormResponse;
use commons_mail::{MailError, Mailer};

use crate::{ApiError, AppState};

/// `POST /api/contact`.
pub async fn contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<FormResponse>, ApiError> {
    let Json(submission) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    validate_contact(&submission)?;

    let mailer = require_mailer(&state)?;
    mailer
        .send_contact(&submission)
        .await
        .map_err(into_api_error)?;
    Ok(Json(FormResponse { sent: true }))
}

/// `POST /api/membership`.
pub async fn membership(
    State(state): State<AppState>,
    payload: Result<Json<MembershipApplication>, JsonRejection>,
) -> Result<Json<FormResponse>, ApiError> {
    let Json(application) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    validate_membership(&application)?;

    let mailer = require_mailer(&state)?;
    mailer
        .send_membership(&application)
        .await
        .map_err(into_api_error)?;
    Ok(Json(FormResponse { sent: true }))
}

fn require_mailer(state: &AppState) -> Result<Arc<Mailer>, ApiError> {
    state.mailer.clone().ok_or_else(|| {
        ApiError::ServiceUnavailable("form notifications are not configured".into())
    })
}

fn into_api_error(error: MailError) -> ApiError {
    if error.is_address() {
        ApiError::BadRequest(error.to_string())
    } else {
        tracing::error!(%error, "notification send failed");
        ApiError::BadGateway(format!("failed to send notification: {error}"))
    }
}

fn validate_contact(submission: &ContactSubmission) -> Result<(), ApiError> {
    require_field("name", &submission.name)?;
    require_field("email", &submission.email)?;
    require_field("message", &submission.message)
}

fn validate_membership(application: &MembershipApplication) -> Result<(), ApiError> {
    require_field("name", &application.name)?;
    require_field("email", &application.email)?;
    require_field("membership_type", &application.membership_type)
}

fn require_field(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("missing required field: {field}")));
    }
    Ok(())
}
