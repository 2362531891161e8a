//! Root application component with providers and the guarded router.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

use crate::components::layout::MainLayout;
use crate::components::toaster::{StatusToaster, Toaster};
use crate::config::AppConfig;
use crate::pages::render_screen;
use crate::pages::status::{AccessDeniedPage, LoadingScreen};
use crate::providers::{BootError, ProviderKind, install_all};
use crate::routing::shell::{Outcome, evaluate, redirect_options};
use crate::routing::table::{NavigationRequest, RouteTable, Screen};
use crate::state::activity_log::ActivityLogState;
use crate::state::auth::AuthState;
use crate::state::notifications::{NotificationState, ToastLane, ToastLevel};
use crate::util::clock::now_ms;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn boot() -> Result<Vec<ProviderKind>, String> {
    let config = AppConfig::compiled().map_err(|e| e.to_string())?;
    provide_context(config.clone());
    install_all(&config).map_err(|e: BootError| e.to_string())
}

/// Root application component.
///
/// Installs every provider in order, then mounts the router shell once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match boot() {
        Ok(installed) => {
            log::debug!("booted with {} providers", installed.len());
            view! {
                <Stylesheet id="leptos" href="/pkg/libdesk.css"/>
                <Title text="Library Desk"/>
                <Toaster/>
                <StatusToaster/>
                <RouterShell/>
            }
            .into_any()
        }
        Err(message) => {
            log::error!("boot failed: {message}");
            view! {
                <div class="boot-error" role="alert">
                    <h1>"Library Desk could not start"</h1>
                    <p>{message}</p>
                </div>
            }
            .into_any()
        }
    }
}

/// Router with two top-level entries: the login path and a wildcard that
/// re-enters the guarded table. Both render through [`Gate`], which reads the
/// location itself, so the router fallback uses it as well.
#[component]
pub fn RouterShell() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Gate/> }>
                <Route path=path!("/login") view=Gate/>
                <Route path=path!("/*any") view=Gate/>
            </Routes>
        </Router>
    }
}

/// Evaluates the current location against the auth state and renders the
/// outcome. Re-evaluates whenever either changes.
#[component]
fn Gate() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let table = expect_context::<RouteTable>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let request = NavigationRequest::new(&location.pathname.get());
        evaluate(&table, &session.get(), &request)
    });

    Effect::new(move || {
        let current = outcome.get();
        log::debug!("{} -> {current:?}", location.pathname.get_untracked());
        match current {
            Outcome::Redirect { to } => navigate(to, redirect_options()),
            Outcome::Denied { screen } => report_denial(screen, session, activity, notifications),
            _ => {}
        }
    });

    move || match outcome.get() {
        Outcome::Loading => view! { <LoadingScreen/> }.into_any(),
        Outcome::Redirect { .. } => ().into_any(),
        Outcome::Login => render_screen(Screen::Login),
        Outcome::Denied { screen } => view! { <MainLayout><AccessDeniedPage screen=screen/></MainLayout> }.into_any(),
        Outcome::Render { screen } => view! { <MainLayout>{render_screen(screen)}</MainLayout> }.into_any(),
        Outcome::NotFound => render_screen(Screen::NotFound),
    }
}

fn report_denial(
    screen: Screen,
    session: RwSignal<AuthState>,
    activity: RwSignal<ActivityLogState>,
    notifications: RwSignal<NotificationState>,
) {
    let actor = session.get_untracked().display_name();
    log::info!("{actor} denied access to {}", screen.title());
    activity.update(|entries| entries.record(actor, format!("denied access to {}", screen.title()), now_ms()));
    notifications.update(|n| {
        n.push(ToastLane::Status, ToastLevel::Error, format!("You do not have access to {}.", screen.title()));
    });
}
