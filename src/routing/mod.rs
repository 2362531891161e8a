//! Route-access state machine.
//!
//! ARCHITECTURE
//! ============
//! `table` declares which screens exist and who may see them, `guard` turns
//! an auth snapshot plus a route into a decision, and `shell` combines both
//! into the outcome the router component renders.

pub mod guard;
pub mod shell;
pub mod table;
