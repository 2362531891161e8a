//! Toast surfaces for the notification queue.
//!
//! `Toaster` renders the stacked lane, which stays until dismissed.
//! `StatusToaster` renders short confirmations and drops each one after
//! `STATUS_TOAST_TTL_MS` in the browser.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::notifications::{NotificationState, Toast, ToastLane};

fn lane_toasts(state: &NotificationState, lane: ToastLane) -> Vec<Toast> {
    state.lane(lane).cloned().collect()
}

/// Ids whose dismiss timer is armed, limited to toasts still on screen.
#[cfg(any(test, feature = "hydrate"))]
fn pending_timers(mut scheduled: Vec<Uuid>, current: &[Toast]) -> Vec<Uuid> {
    scheduled.retain(|id| current.iter().any(|t| t.id == *id));
    scheduled
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let dismiss = move |id: Uuid| {
        notifications.update(|n| {
            n.dismiss(id);
        });
    };

    view! {
        <div class="toaster" aria-live="assertive">
            {move || {
                lane_toasts(&notifications.get(), ToastLane::Stacked)
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.level.css_modifier())>
                                <span class="toast__message">{toast.message}</span>
                                <button class="toast__close" on:click=move |_| dismiss(id)>"×"</button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
pub fn StatusToaster() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move |scheduled: Option<Vec<Uuid>>| {
        let current = lane_toasts(&notifications.get(), ToastLane::Status);
        let mut scheduled = pending_timers(scheduled.unwrap_or_default(), &current);
        for toast in current {
            if scheduled.contains(&toast.id) {
                continue;
            }
            scheduled.push(toast.id);
            let id = toast.id;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::notifications::STATUS_TOAST_TTL_MS).await;
                notifications.update(|n| {
                    n.dismiss(id);
                });
            });
        }
        scheduled
    });

    view! {
        <div class="status-toaster" aria-live="polite">
            {move || {
                lane_toasts(&notifications.get(), ToastLane::Status)
                    .into_iter()
                    .map(|toast| {
                        view! {
                            <div class=format!("status-toast {}", toast.level.css_modifier())>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
