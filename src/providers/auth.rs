//! Auth provider wiring: initial session lookup, timeout, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard only reads the `RwSignal<AuthState>` installed here. This
//! module is the one writer besides the login screen.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::auth::{AuthState, SessionPhase};
use crate::state::query_cache::QueryCache;

/// Resolve the initial session and arm the resolution timeout.
///
/// Off-browser nothing is fetched and the state stays loading, so the server
/// render shows the spinner and the client takes over after hydration.
pub(super) fn start_resolution(session: RwSignal<AuthState>, config: &AppConfig) {
    #[cfg(feature = "hydrate")]
    {
        let api_base = config.api_base.clone();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user(&api_base).await;
            let still_loading = session.get_untracked().loading;
            // A late answer after the timeout still signs the user in.
            if still_loading || user.is_some() {
                log::debug!("auth resolved: signed_in={}", user.is_some());
                session.update(|s| s.resolve(user));
            }
        });

        if let Some(ms) = config.auth_timeout_ms {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
                let mut expired = false;
                session.update(|s| expired = s.expire());
                if expired {
                    log::warn!("auth did not resolve within {ms}ms; treating session as signed out");
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, config);
    }
}

/// Drop cached queries whenever the session ends, so the next user starts clean.
pub(super) fn clear_cache_on_sign_out(session: RwSignal<AuthState>, cache: RwSignal<QueryCache>) {
    Effect::new(move |prev: Option<SessionPhase>| {
        let phase = session.get().phase();
        if prev == Some(SessionPhase::Authenticated) && phase == SessionPhase::Unauthenticated {
            cache.update(QueryCache::clear);
        }
        phase
    });
}

/// End the session: tell the backend, then mark the state signed out.
pub fn sign_out(session: RwSignal<AuthState>, api_base: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&api_base).await;
            session.set(AuthState::signed_out());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        session.set(AuthState::signed_out());
    }
}
