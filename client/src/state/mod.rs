//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Transient layout state lives here. The volunteer form state machine lives
//! in the `volunteer` crate so the server can share its rules.

pub mod ui;
