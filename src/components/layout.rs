//! Navigation chrome wrapped around every allowed screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar lists only the routes the current user is authorized for,
//! using the same rule the guard applies, so a member never sees a link that
//! would end in a denial.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::tooltip::Tooltip;
use crate::config::AppConfig;
use crate::providers::sign_out;
use crate::routing::guard::{Decision, authorize};
use crate::routing::table::{RouteDefinition, RouteTable};
use crate::state::auth::AuthState;
use crate::state::theme::{ThemeMode, ThemeState};
use crate::util::theme_storage;

/// Routes the sidebar should offer to `auth`.
///
/// Copied out of the table so link views can own them.
pub(crate) fn visible_routes(table: &RouteTable, auth: &AuthState) -> Vec<RouteDefinition> {
    table
        .routes()
        .iter()
        .filter(|route| authorize(auth, route.access) == Decision::Allow)
        .copied()
        .collect()
}

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let table = expect_context::<RouteTable>();
    let config = expect_context::<AppConfig>();

    let nav_items = move || {
        visible_routes(&table, &session.get())
            .into_iter()
            .map(|route| {
                let anchor = format!("nav:{}", route.path);
                view! {
                    <Tooltip anchor=anchor label=route.screen.title()>
                        <A href=route.path attr:class="sidebar__link">{route.screen.title()}</A>
                    </Tooltip>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_toggle_theme = move |_| {
        let next = theme_storage::toggle(theme.get().mode);
        theme.update(|t| t.mode = next);
    };

    let on_logout = move |_| sign_out(session, config.api_base.clone());

    view! {
        <div class="app-layout">
            <nav class="sidebar">
                <span class="sidebar__brand">"Library Desk"</span>
                {nav_items}
            </nav>
            <div class="app-layout__main">
                <header class="toolbar">
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                        {move || if theme.get().mode == ThemeMode::Dark { "☀" } else { "☾" }}
                    </button>
                    <span class="toolbar__self">
                        {move || session.get().display_name()}
                        " ("
                        <span class="toolbar__self-role">
                            {move || session.get().user.map_or("none", |u| u.role_label())}
                        </span>
                        ")"
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="app-layout__content">{children()}</main>
            </div>
        </div>
    }
}
