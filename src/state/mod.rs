//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by provider (`auth`, `theme`, `notifications`, etc.) so each
//! context holds one small focused model behind an `RwSignal`.

pub mod activity_log;
pub mod auth;
pub mod notifications;
pub mod query_cache;
pub mod theme;
pub mod tooltip;
