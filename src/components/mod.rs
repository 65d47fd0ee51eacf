//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board chrome and drag surfaces while reading shared
//! state from Leptos context. Mutations that need the API are handed back to
//! the owning page through `Callback` props.

pub mod board_card;
pub mod board_column;
pub mod task_card;
