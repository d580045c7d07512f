//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the delivery sink chosen at startup and the artificial latency
//! applied before each hand-off. Both are immutable after startup, so the
//! state carries no locks.

use std::sync::Arc;
use std::time::Duration;

use crate::services::delivery::ApplicationSink;

/// Clone is required by Axum; the sink is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn ApplicationSink>,
    pub submit_delay: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(sink: Arc<dyn ApplicationSink>, submit_delay: Duration) -> Self {
        Self { sink, submit_delay }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use volunteer::{Skill, SubmissionReceipt, ValidApplication, VolunteerApplication};

    use super::*;
    use crate::services::delivery::DeliveryError;

    /// Sink that keeps every delivered application in memory.
    #[derive(Default)]
    pub struct RecordingSink {
        pub delivered: Mutex<Vec<(SubmissionReceipt, ValidApplication)>>,
    }

    impl RecordingSink {
        pub fn count(&self) -> usize {
            self.delivered.lock().map_or(0, |d| d.len())
        }
    }

    #[async_trait]
    impl ApplicationSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn deliver(&self, receipt: &SubmissionReceipt, application: &ValidApplication) -> Result<(), DeliveryError> {
            if let Ok(mut delivered) = self.delivered.lock() {
                delivered.push((receipt.clone(), application.clone()));
            }
            Ok(())
        }
    }

    /// Sink whose destination always answers 503.
    pub struct FailingSink;

    #[async_trait]
    impl ApplicationSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn deliver(&self, _: &SubmissionReceipt, _: &ValidApplication) -> Result<(), DeliveryError> {
            Err(DeliveryError::WebhookStatus(503))
        }
    }

    #[must_use]
    pub fn test_app_state(sink: Arc<dyn ApplicationSink>) -> AppState {
        AppState::new(sink, Duration::ZERO)
    }

    /// A draft that passes every rule.
    #[must_use]
    pub fn valid_draft() -> VolunteerApplication {
        let mut draft = VolunteerApplication {
            first_name: "Asha".into(),
            last_name: "Verma".into(),
            email: "asha@example.org".into(),
            phone: "+91 98765 43210".into(),
            age: "26-35".into(),
            experience: "informal".into(),
            availability: "weekends".into(),
            motivation: "I grew up near Yamuna Bank and want to help kids there read and write with confidence.".into(),
            terms_accepted: true,
            ..VolunteerApplication::default()
        };
        draft.toggle_skill(Skill::Teaching);
        draft.toggle_skill(Skill::Mathematics);
        draft
    }
}
