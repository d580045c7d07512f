use super::*;

fn receipt() -> SubmissionReceipt {
    SubmissionReceipt { id: "r-1".into(), received_at: "2025-01-01T00:00:00Z".into() }
}

fn filled_form() -> VolunteerForm {
    let mut form = VolunteerForm::new();
    form.update_field(Field::FirstName, FieldValue::Text("Jo".into()));
    form.update_field(Field::LastName, FieldValue::Text("Li".into()));
    form.update_field(Field::Email, FieldValue::Text("a@b.com".into()));
    form.update_field(Field::Phone, FieldValue::Text("9876543210".into()));
    form.update_field(Field::Age, FieldValue::Text("18-25".into()));
    form.update_field(Field::Experience, FieldValue::Text("none".into()));
    form.update_field(Field::Availability, FieldValue::Text("flexible".into()));
    form.toggle_skill(Skill::Teaching);
    form.update_field(Field::Motivation, FieldValue::Text("y".repeat(60)));
    form.update_field(Field::TermsAccepted, FieldValue::Flag(true));
    form
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_form_is_editing_and_empty() {
    let form = VolunteerForm::new();
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(form.application, VolunteerApplication::default());
    assert!(form.errors.is_empty());
    assert!(form.notice.is_none());
    assert!(!form.is_busy());
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_invalid_stays_editing_with_errors() {
    let mut form = VolunteerForm::new();
    let err = form.begin_submit().unwrap_err();
    let SubmitRejected::Invalid(errors) = err else {
        panic!("expected invalid rejection");
    };
    assert_eq!(errors.len(), 10);
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(form.errors, errors);
}

#[test]
fn begin_submit_valid_enters_submitting() {
    let mut form = filled_form();
    let valid = form.begin_submit().unwrap();
    assert_eq!(valid.first_name, "Jo");
    assert_eq!(form.phase, FormPhase::Submitting);
    assert!(form.is_busy());
    assert!(form.errors.is_empty());
}

#[test]
fn second_begin_submit_while_pending_has_no_effect() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    let before = form.clone();
    assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    assert_eq!(form, before);
}

#[test]
fn begin_submit_after_success_is_rejected() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.complete_submit(Ok(receipt()));
    assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitted));
}

// =============================================================
// Editing while not Editing
// =============================================================

#[test]
fn edits_are_ignored_while_submitting() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.update_field(Field::FirstName, FieldValue::Text("Changed".into()));
    form.toggle_skill(Skill::Music);
    assert_eq!(form.application.first_name, "Jo");
    assert!(!form.application.has_skill(Skill::Music));
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = VolunteerForm::new();
    let _ = form.begin_submit();
    form.update_field(Field::FirstName, FieldValue::Text("A".into()));
    form.toggle_skill(Skill::Sports);
    assert!(!form.errors.contains(Field::FirstName));
    assert!(!form.errors.contains(Field::Skills));
    assert!(form.errors.contains(Field::LastName));
    assert_eq!(form.errors.len(), 8);
}

// =============================================================
// complete_submit
// =============================================================

#[test]
fn successful_submit_clears_draft_and_raises_success_notice() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.complete_submit(Ok(receipt()));
    assert_eq!(form.phase, FormPhase::Submitted);
    assert!(form.is_submitted());
    assert_eq!(form.application, VolunteerApplication::default());
    let notice = form.notice.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, SUCCESS_TITLE);
}

#[test]
fn failed_submit_preserves_draft_and_raises_error_notice() {
    let mut form = filled_form();
    let draft = form.application.clone();
    form.begin_submit().unwrap();
    form.complete_submit(Err(SubmissionError::Transport("offline".into())));
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(form.application, draft);
    let notice = form.notice.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.description, FAILURE_DESCRIPTION);
}

#[test]
fn rejected_submit_attaches_server_errors() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    let errors: FieldErrors = [(Field::Email, "Please enter a valid email address")].into_iter().collect();
    form.complete_submit(Err(SubmissionError::Rejected(errors.clone())));
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(form.errors, errors);
}

#[test]
fn complete_submit_outside_submitting_is_ignored() {
    let mut form = filled_form();
    let before = form.clone();
    form.complete_submit(Ok(receipt()));
    assert_eq!(form, before);
}

#[test]
fn failed_submit_can_be_retried() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.complete_submit(Err(SubmissionError::Upstream("502".into())));
    assert!(form.begin_submit().is_ok());
    assert_eq!(form.phase, FormPhase::Submitting);
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_after_submit_returns_to_empty_editing() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.complete_submit(Ok(receipt()));
    form.reset();
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(form.application, VolunteerApplication::default());
    assert!(form.application.skills.is_empty());
    assert!(form.errors.is_empty());
}

#[test]
fn reset_is_ignored_while_submitting() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.reset();
    assert_eq!(form.phase, FormPhase::Submitting);
    assert_eq!(form.application.first_name, "Jo");
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notice_sequence_increments_per_outcome() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.complete_submit(Err(SubmissionError::Transport("x".into())));
    let first = form.notice.clone().unwrap().seq;
    form.begin_submit().unwrap();
    form.complete_submit(Err(SubmissionError::Transport("y".into())));
    let second = form.notice.clone().unwrap().seq;
    assert!(second > first);
}

#[test]
fn stale_dismiss_does_not_clear_newer_notice() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.complete_submit(Err(SubmissionError::Transport("x".into())));
    let stale = form.notice.clone().unwrap().seq;
    form.begin_submit().unwrap();
    form.complete_submit(Err(SubmissionError::Transport("y".into())));
    form.dismiss_notice_seq(stale);
    assert!(form.notice.is_some());
    form.dismiss_notice();
    assert!(form.notice.is_none());
}
