//! Volunteer application domain shared by `client` and `server`.
//!
//! This crate owns the application draft, the fixed option catalogs, the
//! declarative validation rule table, the sign-up form state machine, and the
//! JSON contract of the submission endpoint. It has no UI or IO dependencies so
//! the browser and the server validate with exactly the same rules.

pub mod application;
pub mod form;
pub mod submission;
pub mod validate;

pub use application::{
    AgeGroup, Availability, Experience, Field, FieldInput, FieldValue, Skill, ValidApplication, VolunteerApplication,
};
pub use form::{FormPhase, Notice, NoticeKind, SubmitRejected, VolunteerForm};
pub use submission::{SUBMIT_ENDPOINT, SubmissionError, SubmissionReceipt};
pub use validate::{FieldErrors, RULES, Rule, validate};
