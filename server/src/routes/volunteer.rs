//! Volunteer application route.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use volunteer::VolunteerApplication;
use volunteer::submission::{FailureBody, RejectionBody};

use crate::services::intake::{self, IntakeError};
use crate::state::AppState;

/// `POST /api/volunteer/applications`: validate and hand off one application.
///
/// Answers `201` with the receipt, `422` with per-field errors, `400` for a
/// body that is not an application, and `502` when delivery fails.
pub async fn submit_application(State(state): State<AppState>, body: Bytes) -> Response {
    let draft = match serde_json::from_slice::<VolunteerApplication>(&body) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!(error = %e, "malformed volunteer application body");
            return failure(StatusCode::BAD_REQUEST, format!("malformed application: {e}"));
        }
    };

    match intake::accept(&state, draft).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(IntakeError::Invalid(errors)) => {
            tracing::info!(%errors, "volunteer application rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(RejectionBody { errors })).into_response()
        }
        Err(IntakeError::Delivery(e)) => {
            tracing::error!(error = %e, sink = state.sink.name(), "volunteer application delivery failed");
            failure(StatusCode::BAD_GATEWAY, "could not deliver application".to_owned())
        }
    }
}

fn failure(status: StatusCode, error: String) -> Response {
    (status, Json(FailureBody { error })).into_response()
}

#[cfg(test)]
#[path = "volunteer_test.rs"]
mod tests;
