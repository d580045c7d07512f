//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submission is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed submission
//! surfaces as a form notice and leaves the entered data in place.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use volunteer::{SubmissionError, SubmissionReceipt, ValidApplication};

/// How a submission response status should be decoded.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResponseClass {
    Accepted,
    Rejected,
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> ResponseClass {
    match status {
        200..=299 => ResponseClass::Accepted,
        422 => ResponseClass::Rejected,
        _ => ResponseClass::Failed,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("submit failed: {status} ({detail})"),
        _ => format!("submit failed: {status}"),
    }
}

/// Submit a validated application via `POST /api/volunteer/applications`.
///
/// # Errors
///
/// Returns [`SubmissionError::Rejected`] when the server's own validation
/// refuses the application, [`SubmissionError::Upstream`] for any other
/// non-success status, and [`SubmissionError::Transport`] when the request or
/// response body fails.
pub async fn submit_application(application: &ValidApplication) -> Result<SubmissionReceipt, SubmissionError> {
    #[cfg(feature = "hydrate")]
    {
        use volunteer::submission::{FailureBody, RejectionBody};

        let transport = |e: gloo_net::Error| SubmissionError::Transport(e.to_string());
        let resp = gloo_net::http::Request::post(volunteer::SUBMIT_ENDPOINT)
            .json(application)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        match classify_status(status) {
            ResponseClass::Accepted => resp.json::<SubmissionReceipt>().await.map_err(transport),
            ResponseClass::Rejected => {
                let body: RejectionBody = resp.json().await.map_err(transport)?;
                Err(SubmissionError::Rejected(body.errors))
            }
            ResponseClass::Failed => {
                let detail = resp.json::<FailureBody>().await.ok().map(|b| b.error);
                Err(SubmissionError::Upstream(submit_failed_message(status, detail.as_deref())))
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = application;
        Err(SubmissionError::Transport("not available on server".to_owned()))
    }
}
