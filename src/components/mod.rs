//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome around the screens and read shared
//! state from Leptos context providers.

pub mod layout;
pub mod toaster;
pub mod tooltip;
