//! Intake of volunteer applications posted by the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser validates before it submits, but the endpoint is public, so
//! intake runs the same rule table again on the decoded draft. Only an
//! application that passes is given a receipt and handed to the sink.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;
use volunteer::{FieldErrors, SubmissionReceipt, VolunteerApplication, validate};

use crate::services::delivery::DeliveryError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("application invalid: {0}")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Validate `draft`, mint a receipt, wait out the configured delay, and deliver.
///
/// # Errors
///
/// Returns [`IntakeError::Invalid`] with every failing field, or
/// [`IntakeError::Delivery`] when the sink refuses the application.
pub async fn accept(state: &AppState, draft: VolunteerApplication) -> Result<SubmissionReceipt, IntakeError> {
    let application = validate(&draft).map_err(IntakeError::Invalid)?;
    let receipt = mint_receipt(OffsetDateTime::now_utc());

    if !state.submit_delay.is_zero() {
        tokio::time::sleep(state.submit_delay).await;
    }

    state.sink.deliver(&receipt, &application).await?;
    tracing::info!(id = %receipt.id, sink = state.sink.name(), "volunteer application delivered");
    Ok(receipt)
}

pub(crate) fn mint_receipt(now: OffsetDateTime) -> SubmissionReceipt {
    let received_at = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    SubmissionReceipt { id: Uuid::new_v4().to_string(), received_at }
}

#[cfg(test)]
#[path = "intake_test.rs"]
mod tests;
