//! # kanban-client
//!
//! Leptos + WASM frontend for the kanban task tracker.
//!
//! This crate contains pages, components, application state, REST wire types,
//! and the HTTP API client. Boards, columns, and tasks live behind the REST
//! API; the client keeps only view state in memory and the auth token in
//! `localStorage`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
