//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared site chrome and content blocks. The navbar
//! reads `RwSignal<UiState>` from context; the toast and the form inputs read
//! the `RwSignal<VolunteerForm>` provided by the volunteer page.

pub mod card;
pub mod footer;
pub mod form_field;
pub mod hero_section;
pub mod navbar;
pub mod toast;
