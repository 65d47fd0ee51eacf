//! Networking modules for the board REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies their failures, and `types`
//! defines the shared JSON schema.

pub mod api;
pub mod error;
pub mod types;
