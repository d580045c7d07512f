use volunteer::{AgeGroup, Availability, Experience, Skill};

use super::*;

fn receipt() -> SubmissionReceipt {
    SubmissionReceipt { id: "a1b2".into(), received_at: "2026-01-05T10:00:00Z".into() }
}

fn application() -> ValidApplication {
    ValidApplication {
        first_name: "Asha".into(),
        last_name: "Verma".into(),
        email: "asha@example.org".into(),
        phone: "+91 98765 43210".into(),
        age: AgeGroup::From26To35,
        experience: Experience::Informal,
        availability: Availability::Weekends,
        skills: vec![Skill::Teaching, Skill::ArtAndCrafts],
        motivation: "I want to teach <b>reading</b> & writing to kids in my neighbourhood every weekend.".into(),
        terms_accepted: true,
    }
}

// =============================================================================
// escape_html
// =============================================================================

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
}

#[test]
fn escape_html_keeps_plain_text() {
    assert_eq!(escape_html("नमस्ते world"), "नमस्ते world");
}

// =============================================================================
// render_application_email
// =============================================================================

#[test]
fn email_contains_every_section() {
    let html = render_application_email(&receipt(), &application());
    assert!(html.contains("Asha Verma"));
    assert!(html.contains("asha@example.org"));
    assert!(html.contains("+91 98765 43210"));
    assert!(html.contains(AgeGroup::From26To35.label()));
    assert!(html.contains(Experience::Informal.label()));
    assert!(html.contains(Availability::Weekends.label()));
    assert!(html.contains("Teaching, Art &amp; Crafts"));
    assert!(html.contains("Application a1b2 received 2026-01-05T10:00:00Z"));
}

#[test]
fn email_escapes_motivation() {
    let html = render_application_email(&receipt(), &application());
    assert!(html.contains("&lt;b&gt;reading&lt;/b&gt; &amp; writing"));
    assert!(!html.contains("<b>reading</b>"));
}

#[test]
fn email_leaves_no_placeholders() {
    let html = render_application_email(&receipt(), &application());
    assert!(!html.contains("{{"), "unfilled placeholder in template");
}

#[test]
fn email_does_not_expand_placeholders_in_applicant_text() {
    let mut application = application();
    application.first_name = "{{MOTIVATION}}".into();
    application.phone = "{{ID}}".into();

    let html = render_application_email(&receipt(), &application);

    assert!(html.contains("<td>{{MOTIVATION}} Verma</td>"));
    assert!(html.contains("<td>{{ID}}</td>"));
    assert_eq!(html.matches("neighbourhood every weekend").count(), 1);
}

#[test]
fn fill_template_replaces_known_keys_in_one_pass() {
    let filled = fill_template("a {{X}} b {{Y}} c {{Z}}", |key| match key {
        "X" => Some("{{Y}}".to_owned()),
        "Y" => Some("y".to_owned()),
        _ => None,
    });
    assert_eq!(filled, "a {{Y}} b y c {{Z}}");
}

#[test]
fn fill_template_keeps_unterminated_marker() {
    assert_eq!(fill_template("x {{X}} {{open", |_| Some("1".to_owned())), "x 1 {{open");
}

// =============================================================================
// Sinks
// =============================================================================

#[tokio::test]
async fn log_sink_always_acknowledges() {
    let sink = LogSink;
    assert_eq!(sink.name(), "log");
    assert!(sink.deliver(&receipt(), &application()).await.is_ok());
}

#[tokio::test]
async fn webhook_sink_reports_unreachable_endpoint() {
    let sink = WebhookSink::new("http://127.0.0.1:9/hook".into(), Duration::from_millis(500));
    let err = sink.deliver(&receipt(), &application()).await.unwrap_err();
    assert!(matches!(err, DeliveryError::Webhook(_)));
}

#[test]
fn webhook_payload_nests_receipt_and_application() {
    let receipt = receipt();
    let application = application();
    let json = serde_json::to_value(WebhookPayload { receipt: &receipt, application: &application }).unwrap();
    assert_eq!(json["receipt"]["id"], "a1b2");
    assert_eq!(json["application"]["firstName"], "Asha");
    assert_eq!(json["application"]["skills"][1], "Art & Crafts");
}

#[test]
fn build_sink_follows_config() {
    let mut config = ServerConfig {
        bind_addr: "127.0.0.1".into(),
        port: 3000,
        sink: SinkConfig::Log,
        submit_delay: Duration::ZERO,
    };
    assert_eq!(build_sink(&config).name(), "log");

    config.sink = SinkConfig::Webhook { url: "https://hooks.example.org".into(), timeout: Duration::from_secs(1) };
    assert_eq!(build_sink(&config).name(), "webhook");

    config.sink = SinkConfig::Email {
        api_key: "re_test".into(),
        from: "noreply@example.org".into(),
        to: "volunteer@example.org".into(),
    };
    assert_eq!(build_sink(&config).name(), "email");
}
