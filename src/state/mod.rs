//! Client state models shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules are plain data with synchronous transitions. Pages wrap them
//! in `RwSignal`s provided as Leptos context and apply network completions
//! through the same methods, so the transitions are testable natively.

pub mod auth;
pub mod board;
pub mod boards;
pub mod form;
