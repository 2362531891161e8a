//! Process-wide providers and their install order.
//!
//! ARCHITECTURE
//! ============
//! Providers are installed as Leptos contexts by an explicit list of steps,
//! executed top to bottom:
//!
//! `QueryCache → Theme → TooltipHost → Auth → Notifications → ActivityLog → Router`
//!
//! Later providers may read earlier ones while installing (the activity log
//! watches auth to attribute entries). Each kind lists its prerequisites and
//! [`run_steps`] refuses an order that breaks them before anything runs.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod auth;

use std::fmt;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::routing::table::{RouteTable, RouteTableError};
use crate::state::activity_log::ActivityLogState;
use crate::state::auth::{AuthState, SessionPhase};
use crate::state::notifications::NotificationState;
use crate::state::query_cache::QueryCache;
use crate::state::theme::ThemeState;
use crate::state::tooltip::TooltipState;
use crate::util::clock::now_ms;
use crate::util::theme_storage;

pub use auth::sign_out;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    QueryCache,
    Theme,
    TooltipHost,
    Auth,
    Notifications,
    ActivityLog,
    Router,
}

impl ProviderKind {
    /// Providers that must already be installed when this one installs.
    pub fn prerequisites(self) -> &'static [ProviderKind] {
        match self {
            Self::QueryCache | Self::Theme => &[],
            Self::TooltipHost | Self::Notifications => &[Self::Theme],
            Self::Auth => &[Self::QueryCache],
            Self::ActivityLog => &[Self::Auth],
            Self::Router => &[
                Self::QueryCache,
                Self::Theme,
                Self::TooltipHost,
                Self::Auth,
                Self::Notifications,
                Self::ActivityLog,
            ],
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::QueryCache => "query-cache",
            Self::Theme => "theme",
            Self::TooltipHost => "tooltip-host",
            Self::Auth => "auth",
            Self::Notifications => "notifications",
            Self::ActivityLog => "activity-log",
            Self::Router => "router",
        };
        f.write_str(name)
    }
}

/// Install order of the composition root.
pub const MOUNT_ORDER: [ProviderKind; 7] = [
    ProviderKind::QueryCache,
    ProviderKind::Theme,
    ProviderKind::TooltipHost,
    ProviderKind::Auth,
    ProviderKind::Notifications,
    ProviderKind::ActivityLog,
    ProviderKind::Router,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error("{provider} must be installed after {missing}")]
    OutOfOrder { provider: ProviderKind, missing: ProviderKind },
    #[error("{0} is installed twice")]
    Duplicate(ProviderKind),
    #[error("{provider} needs the {missing} context, which is not installed")]
    MissingContext { provider: ProviderKind, missing: ProviderKind },
    #[error("invalid route table: {0}")]
    RouteTable(#[from] RouteTableError),
}

/// Check that every provider comes after its prerequisites, once.
///
/// # Errors
///
/// Returns [`BootError::Duplicate`] or [`BootError::OutOfOrder`].
pub fn validate_order(order: &[ProviderKind]) -> Result<(), BootError> {
    for (i, kind) in order.iter().enumerate() {
        let before = &order[..i];
        if before.contains(kind) {
            return Err(BootError::Duplicate(*kind));
        }
        if let Some(missing) = kind.prerequisites().iter().find(|p| !before.contains(p)) {
            return Err(BootError::OutOfOrder { provider: *kind, missing: *missing });
        }
    }
    Ok(())
}

/// Validate `order`, then run `step` for each kind in sequence.
///
/// Stops at the first failing step. Returns the kinds that were installed.
///
/// # Errors
///
/// Returns the validation error or the first step error.
pub fn run_steps<F>(order: &[ProviderKind], mut step: F) -> Result<Vec<ProviderKind>, BootError>
where
    F: FnMut(ProviderKind) -> Result<(), BootError>,
{
    validate_order(order)?;
    let mut installed = Vec::with_capacity(order.len());
    for kind in order {
        step(*kind)?;
        log::info!("provider installed: {kind}");
        installed.push(*kind);
    }
    Ok(installed)
}

/// Install every provider context in [`MOUNT_ORDER`].
///
/// Must run inside the reactive owner of the root component.
///
/// # Errors
///
/// See [`run_steps`].
pub fn install_all(config: &AppConfig) -> Result<Vec<ProviderKind>, BootError> {
    run_steps(&MOUNT_ORDER, |kind| install(kind, config))
}

fn install(kind: ProviderKind, config: &AppConfig) -> Result<(), BootError> {
    match kind {
        ProviderKind::QueryCache => {
            provide_context(RwSignal::new(QueryCache::default()));
        }
        ProviderKind::Theme => {
            let mode = theme_storage::read_preference();
            theme_storage::apply(mode);
            provide_context(RwSignal::new(ThemeState { mode }));
        }
        ProviderKind::TooltipHost => {
            provide_context(RwSignal::new(TooltipState::default()));
        }
        ProviderKind::Auth => {
            let cache = require::<QueryCache>(kind, ProviderKind::QueryCache)?;
            let session = RwSignal::new(AuthState::default());
            provide_context(session);
            auth::clear_cache_on_sign_out(session, cache);
            auth::start_resolution(session, config);
        }
        ProviderKind::Notifications => {
            provide_context(RwSignal::new(NotificationState::new(config.toast_limit)));
        }
        ProviderKind::ActivityLog => {
            let session = require::<AuthState>(kind, ProviderKind::Auth)?;
            let activity = RwSignal::new(ActivityLogState::new(config.activity_log_capacity));
            provide_context(activity);
            record_session_changes(session, activity);
        }
        ProviderKind::Router => {
            provide_context(RouteTable::library()?);
        }
    }
    Ok(())
}

fn require<T>(provider: ProviderKind, missing: ProviderKind) -> Result<RwSignal<T>, BootError>
where
    T: Send + Sync + 'static,
{
    use_context::<RwSignal<T>>().ok_or(BootError::MissingContext { provider, missing })
}

/// Append an activity entry whenever the session settles into a new phase.
fn record_session_changes(session: RwSignal<AuthState>, activity: RwSignal<ActivityLogState>) {
    Effect::new(move |prev: Option<(SessionPhase, String)>| {
        let state = session.get();
        let phase = state.phase();
        let name = state.display_name();
        if let Some((prev_phase, prev_name)) = prev {
            if prev_phase != phase {
                match phase {
                    SessionPhase::Authenticated => activity.update(|l| l.record(name.clone(), "signed in", now_ms())),
                    SessionPhase::Unauthenticated if prev_phase == SessionPhase::Authenticated => {
                        activity.update(|l| l.record(prev_name, "signed out", now_ms()));
                    }
                    SessionPhase::Unauthenticated | SessionPhase::Unknown => {}
                }
            }
        }
        (phase, name)
    });
}
