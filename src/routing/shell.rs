//! Router shell evaluation: table lookup + guard → what to render.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::RouterShell` calls [`evaluate`] every time the location or the auth
//! signal changes and renders the returned [`Outcome`]. No outcome is cached,
//! so a back-navigation onto a path that was redirected away from is judged
//! again from scratch.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos_router::NavigateOptions;

use crate::routing::guard::{Decision, check_session, decide};
use crate::routing::table::{NavigationRequest, ROOT_PATH, RouteMatch, RouteTable, Screen};
use crate::state::auth::AuthState;

/// What the shell shows for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Auth has not resolved; show the neutral spinner.
    Loading,
    /// Replace the current history entry with `to`.
    Redirect { to: &'static str },
    /// Bare login screen, without layout chrome.
    Login,
    /// Signed in, but the role does not admit `screen`. The screen never runs.
    Denied { screen: Screen },
    /// Render `screen` inside the layout.
    Render { screen: Screen },
    /// No route claims the path.
    NotFound,
}

/// Evaluate one navigation request.
pub fn evaluate(table: &RouteTable, auth: &AuthState, request: &NavigationRequest) -> Outcome {
    match table.resolve(request) {
        RouteMatch::Login => match check_session(auth) {
            Decision::Pending => Outcome::Loading,
            Decision::Allow => Outcome::Redirect { to: ROOT_PATH },
            Decision::Redirect(_) | Decision::Deny => Outcome::Login,
        },
        RouteMatch::Guarded(route) => match decide(auth, route) {
            Decision::Pending => Outcome::Loading,
            Decision::Redirect(to) => Outcome::Redirect { to },
            Decision::Deny => Outcome::Denied { screen: route.screen },
            Decision::Allow => Outcome::Render { screen: route.screen },
        },
        RouteMatch::NotFound => Outcome::NotFound,
    }
}

/// Navigation options for every guard redirect.
///
/// Redirects replace the current entry so the refused path is not left
/// behind in history.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
