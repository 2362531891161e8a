//! Login screen: email + password form.
//!
//! The credential exchange is the backend's business. On success the screen
//! only writes the returned user into the auth state; the router shell then
//! notices the signed-in session and replaces `/login` with `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationState;

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let config = expect_context::<AppConfig>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::notifications::{ToastLane, ToastLevel};

            let api_base = config.api_base.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&api_base, &email_value, &password_value).await {
                    Ok(user) => {
                        let name = user.name.clone();
                        session.update(|s| s.resolve(Some(user)));
                        notifications.update(|n| {
                            n.push(ToastLane::Status, ToastLevel::Success, format!("Welcome back, {name}"));
                        });
                    }
                    Err(e) => {
                        notifications.update(|n| {
                            n.push(ToastLane::Stacked, ToastLevel::Error, format!("Sign-in failed: {e}"));
                        });
                        info.set(String::new());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &config, session, notifications);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Library Desk"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@library.org"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
