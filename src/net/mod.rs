//! Networking modules for the JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the requests, `types` defines the wire schema.

pub mod api;
pub mod types;
