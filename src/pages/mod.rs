//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, loads, API calls) and
//! delegates rendering details to `components`.

pub mod board;
pub mod boards;
pub mod login;
pub mod register;
