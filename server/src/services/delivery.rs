//! Delivery of accepted volunteer applications.
//!
//! DESIGN
//! ======
//! Intake never knows where an application ends up. It hands the receipt and
//! the validated application to an [`ApplicationSink`] chosen at startup from
//! `VOLUNTEER_SINK`:
//! - [`LogSink`] records a structured log line and acknowledges.
//! - [`WebhookSink`] POSTs `{ receipt, application }` as JSON.
//! - [`EmailSink`] mails an HTML summary to the volunteer coordinator via Resend.
//!
//! ERROR HANDLING
//! ==============
//! Every sink failure maps to [`DeliveryError`]; the route turns it into a
//! `502` so the browser keeps the draft and shows the failure notice.

use std::time::Duration;

use async_trait::async_trait;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use serde::Serialize;
use volunteer::{SubmissionReceipt, ValidApplication};

use crate::config::{ServerConfig, SinkConfig};

const APPLICATION_EMAIL_TEMPLATE: &str = include_str!("../../templates/application_email.html");

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("webhook request failed: {0}")]
    Webhook(#[from] reqwest::Error),
    #[error("webhook answered {0}")]
    WebhookStatus(u16),
    #[error("email delivery failed: {0}")]
    Email(String),
}

/// Destination for accepted applications.
#[async_trait]
pub trait ApplicationSink: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Hand one accepted application off.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] if the destination could not take it.
    async fn deliver(&self, receipt: &SubmissionReceipt, application: &ValidApplication) -> Result<(), DeliveryError>;
}

/// Build the sink selected by configuration.
#[must_use]
pub fn build_sink(config: &ServerConfig) -> Box<dyn ApplicationSink> {
    match &config.sink {
        SinkConfig::Log => Box::new(LogSink),
        SinkConfig::Webhook { url, timeout } => Box::new(WebhookSink::new(url.clone(), *timeout)),
        SinkConfig::Email { api_key, from, to } => Box::new(EmailSink::new(api_key, from.clone(), to.clone())),
    }
}

// =============================================================================
// LOG
// =============================================================================

pub struct LogSink;

#[async_trait]
impl ApplicationSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, receipt: &SubmissionReceipt, application: &ValidApplication) -> Result<(), DeliveryError> {
        tracing::info!(
            id = %receipt.id,
            received_at = %receipt.received_at,
            name = %application.full_name(),
            email = %application.email,
            age = application.age.value(),
            experience = application.experience.value(),
            availability = application.availability.value(),
            skills = application.skills.len(),
            "volunteer application received"
        );
        Ok(())
    }
}

// =============================================================================
// WEBHOOK
// =============================================================================

/// JSON body posted to the webhook.
#[derive(Serialize)]
pub struct WebhookPayload<'a> {
    pub receipt: &'a SubmissionReceipt,
    pub application: &'a ValidApplication,
}

pub struct WebhookSink {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl WebhookSink {
    #[must_use]
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { http: reqwest::Client::new(), url, timeout }
    }
}

#[async_trait]
impl ApplicationSink for WebhookSink {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, receipt: &SubmissionReceipt, application: &ValidApplication) -> Result<(), DeliveryError> {
        let response = self
            .http
            .post(&self.url)
            .timeout(self.timeout)
            .json(&WebhookPayload { receipt, application })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::WebhookStatus(status.as_u16()));
        }
        Ok(())
    }
}

// =============================================================================
// EMAIL
// =============================================================================

pub struct EmailSink {
    resend: Resend,
    from: String,
    to: String,
}

impl EmailSink {
    #[must_use]
    pub fn new(api_key: &str, from: String, to: String) -> Self {
        Self { resend: Resend::new(api_key), from, to }
    }
}

#[async_trait]
impl ApplicationSink for EmailSink {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn deliver(&self, receipt: &SubmissionReceipt, application: &ValidApplication) -> Result<(), DeliveryError> {
        let to = [self.to.as_str()];
        let subject = format!("New volunteer application: {}", application.full_name());
        let html = render_application_email(receipt, application);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| DeliveryError::Email(e.to_string()))?;
        Ok(())
    }
}

/// Fill the coordinator email template. Every applicant-supplied value is escaped.
#[must_use]
pub fn render_application_email(receipt: &SubmissionReceipt, application: &ValidApplication) -> String {
    let skills = application
        .skills
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ");

    fill_template(APPLICATION_EMAIL_TEMPLATE, |key| match key {
        "ID" => Some(escape_html(&receipt.id)),
        "RECEIVED_AT" => Some(escape_html(&receipt.received_at)),
        "NAME" => Some(escape_html(&application.full_name())),
        "EMAIL" => Some(escape_html(&application.email)),
        "PHONE" => Some(escape_html(&application.phone)),
        "AGE" => Some(application.age.label().to_owned()),
        "EXPERIENCE" => Some(application.experience.label().to_owned()),
        "AVAILABILITY" => Some(application.availability.label().to_owned()),
        "SKILLS" => Some(escape_html(&skills)),
        "MOTIVATION" => Some(escape_html(&application.motivation)),
        _ => None,
    })
}

/// Replace each `{{KEY}}` in `template` in one left-to-right pass. Substituted
/// text is never scanned again; unknown keys are left as written.
#[must_use]
pub fn fill_template(template: &str, value_of: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };
        let key = &after[..close];
        match value_of(key) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "delivery_test.rs"]
mod tests;
