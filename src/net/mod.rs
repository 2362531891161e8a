//! Networking modules for the auth HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls the auth provider and login screen need, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
