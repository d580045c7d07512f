//! JSON contract of the submission endpoint.
//!
//! `POST /api/volunteer/applications` takes an application (draft shape) and
//! answers with one of:
//! - `201 Created` + [`SubmissionReceipt`]
//! - `422 Unprocessable Entity` + [`RejectionBody`]
//! - any other status + [`FailureBody`]

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use serde::{Deserialize, Serialize};

use crate::validate::FieldErrors;

pub const SUBMIT_ENDPOINT: &str = "/api/volunteer/applications";

/// Acknowledgment returned once an application has been handed off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: String,
    /// RFC 3339 UTC timestamp.
    pub received_at: String,
}

/// Body of a `422` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionBody {
    pub errors: FieldErrors,
}

/// Body of any other non-success response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
}

/// Why a submission did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The receiver re-validated the application and refused it.
    #[error("application rejected: {0}")]
    Rejected(FieldErrors),
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The receiver answered but could not hand the application off.
    #[error("submission failed: {0}")]
    Upstream(String),
}
