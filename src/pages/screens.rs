//! Guarded library screens.
//!
//! Each screen derives what it needs from context; none takes route props.
//! Their content is placeholder chrome around the screen title.

use leptos::prelude::*;

use crate::routing::table::Screen;
use crate::state::activity_log::ActivityLogState;
use crate::state::auth::AuthState;

#[component]
fn ScreenFrame(screen: Screen, children: Children) -> impl IntoView {
    view! {
        <section class="screen">
            <h1 class="screen__title">{screen.title()}</h1>
            {children()}
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthState>>();
    view! {
        <ScreenFrame screen=Screen::Dashboard>
            <p>"Signed in as " {move || session.get().display_name()}</p>
        </ScreenFrame>
    }
}

#[component]
pub fn BooksPage() -> impl IntoView {
    view! { <ScreenFrame screen=Screen::Books><p>"Catalogue"</p></ScreenFrame> }
}

#[component]
pub fn MembersPage() -> impl IntoView {
    view! { <ScreenFrame screen=Screen::Members><p>"Member directory"</p></ScreenFrame> }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    view! { <ScreenFrame screen=Screen::Transactions><p>"Loan history"</p></ScreenFrame> }
}

#[component]
pub fn IssueReturnPage() -> impl IntoView {
    view! { <ScreenFrame screen=Screen::IssueReturn><p>"Issue and return desk"</p></ScreenFrame> }
}

#[component]
pub fn ScannerPage() -> impl IntoView {
    view! { <ScreenFrame screen=Screen::Scanner><p>"Barcode scanner"</p></ScreenFrame> }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! { <ScreenFrame screen=Screen::Analytics><p>"Circulation analytics"</p></ScreenFrame> }
}

/// Session activity recorded by the activity-log provider, newest first.
#[component]
pub fn ActivityLogsPage() -> impl IntoView {
    let log = expect_context::<RwSignal<ActivityLogState>>();
    view! {
        <ScreenFrame screen=Screen::ActivityLogs>
            <ul class="activity-list">
                {move || {
                    log.get()
                        .recent()
                        .map(|entry| {
                            view! {
                                <li class="activity-list__item">
                                    <span class="activity-list__actor">{entry.actor.clone()}</span>
                                    " "
                                    <span class="activity-list__action">{entry.action.clone()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </ScreenFrame>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! { <ScreenFrame screen=Screen::Settings><p>"Administration"</p></ScreenFrame> }
}
