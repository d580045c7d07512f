//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` hands validated volunteer applications to the server. The wire
//! schema itself lives in `volunteer::submission`.

pub mod api;
