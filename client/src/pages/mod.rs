//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped content and orchestration and delegates
//! rendering details to `components`.

pub mod about;
pub mod home;
pub mod not_found;
pub mod volunteer;
