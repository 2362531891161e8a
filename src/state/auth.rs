//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and by user-aware components. Only the auth
//! provider and the login/logout flows write it; the guard never does.
//!
//! LIFECYCLE
//! =========
//! A fresh state is unauthenticated and loading. The provider resolves it
//! once `/api/auth/me` answers (or the resolution timeout fires), and later
//! sign-in/sign-out flows move it between the two resolved phases.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Coarse session status derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// The auth collaborator has not resolved yet.
    Unknown,
    Unauthenticated,
    Authenticated,
}

/// Authentication snapshot shared through context as `RwSignal<AuthState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub loading: bool,
    pub user: Option<User>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { authenticated: false, loading: true, user: None }
    }
}

impl AuthState {
    /// Resolved state for a signed-in user.
    pub fn signed_in(user: User) -> Self {
        Self { authenticated: true, loading: false, user: Some(user) }
    }

    /// Resolved state with nobody signed in.
    pub fn signed_out() -> Self {
        Self { authenticated: false, loading: false, user: None }
    }

    /// Apply the answer of the current-user lookup.
    pub fn resolve(&mut self, user: Option<User>) {
        *self = match user {
            Some(user) => Self::signed_in(user),
            None => Self::signed_out(),
        };
    }

    /// Give up on a resolution that never finished.
    ///
    /// Returns `true` if the state was still loading and has been moved to
    /// signed out; a state that already resolved is left untouched.
    pub fn expire(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        *self = Self::signed_out();
        true
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Unknown
        } else if self.authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    /// Display name for chrome and activity entries.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "anonymous".to_owned(), |u| u.name.clone())
    }
}
