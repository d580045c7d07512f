use std::sync::Arc;
use std::time::Duration;

use time::macros::datetime;
use volunteer::Field;

use super::*;
use crate::state::test_helpers::{FailingSink, RecordingSink, test_app_state, valid_draft};

#[tokio::test]
async fn valid_draft_is_delivered_once() {
    let sink = Arc::new(RecordingSink::default());
    let state = test_app_state(sink.clone());

    let receipt = accept(&state, valid_draft()).await.unwrap();

    assert_eq!(sink.count(), 1);
    let delivered = sink.delivered.lock().unwrap();
    assert_eq!(delivered[0].0, receipt);
    assert_eq!(delivered[0].1.full_name(), "Asha Verma");
}

#[tokio::test]
async fn invalid_draft_reports_every_field_and_is_not_delivered() {
    let sink = Arc::new(RecordingSink::default());
    let state = test_app_state(sink.clone());

    let err = accept(&state, VolunteerApplication::default()).await.unwrap_err();

    let IntakeError::Invalid(errors) = err else {
        panic!("expected Invalid, got {err:?}");
    };
    assert_eq!(errors.len(), Field::ALL.len());
    assert_eq!(sink.count(), 0);
}

#[tokio::test]
async fn short_motivation_alone_is_rejected() {
    let state = test_app_state(Arc::new(RecordingSink::default()));
    let mut draft = valid_draft();
    draft.motivation = "a".repeat(49);

    let err = accept(&state, draft).await.unwrap_err();

    let IntakeError::Invalid(errors) = err else {
        panic!("expected Invalid, got {err:?}");
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Motivation]);
}

#[tokio::test]
async fn sink_failure_surfaces_as_delivery_error() {
    let state = test_app_state(Arc::new(FailingSink));
    let err = accept(&state, valid_draft()).await.unwrap_err();
    assert!(matches!(err, IntakeError::Delivery(DeliveryError::WebhookStatus(503))));
    assert_eq!(err.to_string(), "webhook answered 503");
}

#[tokio::test]
async fn configured_delay_elapses_before_delivery() {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new(sink.clone(), Duration::from_millis(50));

    let started = tokio::time::Instant::now();
    accept(&state, valid_draft()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(sink.count(), 1);
}

#[test]
fn receipt_uses_rfc3339_utc_and_unique_ids() {
    let now = datetime!(2026-01-05 10:30:00 UTC);
    let a = mint_receipt(now);
    let b = mint_receipt(now);

    assert_eq!(a.received_at, "2026-01-05T10:30:00Z");
    assert_ne!(a.id, b.id);
    assert!(Uuid::parse_str(&a.id).is_ok());
}
