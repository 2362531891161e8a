//! Non-screen outcomes of the router shell: spinner, denial, not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::{ROOT_PATH, Screen};

/// Neutral placeholder while auth resolves.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
        </div>
    }
}

/// Shown instead of a screen the current role may not open.
#[component]
pub fn AccessDeniedPage(screen: Screen) -> impl IntoView {
    view! {
        <section class="screen screen--denied">
            <h1 class="screen__title">"Access denied"</h1>
            <p>"Your role does not allow opening " {screen.title()} "."</p>
            <A href=ROOT_PATH>"Back to dashboard"</A>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="screen screen--not-found">
            <h1 class="screen__title">"404"</h1>
            <p>"Page not found."</p>
            <A href=ROOT_PATH>"Return home"</A>
        </section>
    }
}
