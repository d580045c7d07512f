//! Sign-up form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The volunteer page keeps one `VolunteerForm` in a reactive signal. Input
//! handlers call the edit methods, the submit handler calls `begin_submit`,
//! spawns the network call, and feeds its outcome to `complete_submit`.
//!
//! ```text
//! Editing --begin_submit (valid)--> Submitting --Ok--> Submitted --reset--> Editing
//!    ^                                  |
//!    +-------------- Err ---------------+
//! ```
//!
//! A failed validation leaves the form in `Editing` with errors attached.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::application::{Field, FieldValue, Skill, ValidApplication, VolunteerApplication};
use crate::submission::{SubmissionError, SubmissionReceipt};
use crate::validate::{FieldErrors, validate};

pub const SUCCESS_TITLE: &str = "Application Submitted!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for your interest. We will contact you soon.";
pub const FAILURE_TITLE: &str = "Error";
pub const FAILURE_DESCRIPTION: &str = "There was a problem submitting your application. Please try again.";

/// Lifecycle phase of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast raised by a submission outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Increments with every notice so a stale dismiss timer can be ignored.
    pub seq: u64,
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// Why `begin_submit` did not start a submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the application was already submitted")]
    AlreadySubmitted,
    #[error("{0}")]
    Invalid(FieldErrors),
}

/// Form state: the draft, the phase, inline errors, and the current toast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VolunteerForm {
    pub application: VolunteerApplication,
    pub phase: FormPhase,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl VolunteerForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a submission is in flight; the submit control is disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Edit one field. Only applies while editing; clears that field's error.
    pub fn update_field(&mut self, field: Field, value: FieldValue) {
        if self.phase != FormPhase::Editing {
            return;
        }
        self.application.update_field(field, value);
        self.errors.remove(field);
    }

    /// Toggle one skill. Only applies while editing; clears the skills error.
    pub fn toggle_skill(&mut self, skill: Skill) {
        if self.phase != FormPhase::Editing {
            return;
        }
        self.application.toggle_skill(skill);
        self.errors.remove(Field::Skills);
    }

    /// Validate the draft and, if it passes, move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::InFlight`] while a submission is pending,
    /// [`SubmitRejected::AlreadySubmitted`] after success, and
    /// [`SubmitRejected::Invalid`] with every failing field otherwise.
    pub fn begin_submit(&mut self) -> Result<ValidApplication, SubmitRejected> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitRejected::InFlight),
            FormPhase::Submitted => return Err(SubmitRejected::AlreadySubmitted),
            FormPhase::Editing => {}
        }
        match validate(&self.application) {
            Ok(valid) => {
                self.errors = FieldErrors::new();
                self.phase = FormPhase::Submitting;
                Ok(valid)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Apply the outcome of the submission started by `begin_submit`.
    ///
    /// Success clears the draft and enters `Submitted`. Failure returns to
    /// `Editing` with the draft intact; server-side field errors are attached.
    pub fn complete_submit(&mut self, outcome: Result<SubmissionReceipt, SubmissionError>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        match outcome {
            Ok(_) => {
                self.application = VolunteerApplication::default();
                self.phase = FormPhase::Submitted;
                self.raise(NoticeKind::Success, SUCCESS_TITLE, SUCCESS_DESCRIPTION);
            }
            Err(err) => {
                if let SubmissionError::Rejected(errors) = err {
                    self.errors = errors;
                }
                self.phase = FormPhase::Editing;
                self.raise(NoticeKind::Error, FAILURE_TITLE, FAILURE_DESCRIPTION);
            }
        }
    }

    /// Return to an empty, editable form. Ignored while a submission is pending.
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.application = VolunteerApplication::default();
        self.errors = FieldErrors::new();
        self.phase = FormPhase::Editing;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Dismiss the current notice only if it is still the one numbered `seq`.
    pub fn dismiss_notice_seq(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    fn raise(&mut self, kind: NoticeKind, title: &'static str, description: &'static str) {
        self.notice_seq += 1;
        self.notice = Some(Notice { seq: self.notice_seq, kind, title, description });
    }
}
