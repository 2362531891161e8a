//! Access guard: the per-navigation access decision.
//!
//! Rules, first match wins:
//! 1. auth still loading → `Pending`
//! 2. not authenticated → `Redirect(/login)`
//! 3. route restricted and the user's role not allowed → `Deny`
//! 4. otherwise → `Allow`
//!
//! Rules 1-2 form the session check run once at the outer routing boundary;
//! rules 3-4 form the per-route authorization run at the inner boundary.
//! Everything here is a pure function of its arguments.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routing::table::{Access, LOGIN_PATH, RouteDefinition};
use crate::state::auth::AuthState;

/// Outcome of evaluating one navigation against the current auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
    Pending,
    Deny,
}

/// Outer boundary: is there a resolved, authenticated session at all?
pub fn check_session(auth: &AuthState) -> Decision {
    if auth.loading {
        Decision::Pending
    } else if !auth.authenticated {
        Decision::Redirect(LOGIN_PATH)
    } else {
        Decision::Allow
    }
}

/// Inner boundary: may the authenticated user render a route with `access`?
///
/// An authenticated state without a user, or a user without a role, fails
/// closed on restricted routes.
pub fn authorize(auth: &AuthState, access: Access) -> Decision {
    if access.permits(auth.role()) {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

/// Full decision for a matched route.
pub fn decide(auth: &AuthState, route: &RouteDefinition) -> Decision {
    match check_session(auth) {
        Decision::Allow => authorize(auth, route.access),
        other => other,
    }
}
