//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `intake` owns the accept-or-reject decision for an incoming application;
//! `delivery` owns where accepted applications go. Route handlers stay
//! focused on status codes and body shapes.

pub mod delivery;
pub mod intake;
