//! Hover tooltip bound to the shared tooltip host.

use leptos::prelude::*;

use crate::state::tooltip::TooltipState;

/// Start the host's hover delay for `key`, opening it when the delay elapses.
fn hover(host: RwSignal<TooltipState>, key: String) {
    host.update(|h| h.arm(&key));

    #[cfg(feature = "hydrate")]
    {
        let delay_ms = host.get_untracked().delay_ms;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            host.update(|h| {
                h.fire(&key);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    host.update(|h| {
        h.fire(&key);
    });
}

/// Wraps `children` and shows `label` once the pointer has rested on them for
/// the host's delay.
///
/// The host allows one open tooltip at a time, keyed by `anchor`.
#[component]
pub fn Tooltip(anchor: String, label: &'static str, children: Children) -> impl IntoView {
    let host = expect_context::<RwSignal<TooltipState>>();
    let show_key = anchor.clone();
    let hide_key = anchor.clone();

    view! {
        <span
            class="tooltip"
            on:mouseenter=move |_| hover(host, show_key.clone())
            on:mouseleave=move |_| host.update(|h| h.hide(&hide_key))
        >
            {children()}
            <Show when=move || host.get().is_open(&anchor)>
                <span class="tooltip__bubble" role="tooltip">{label}</span>
            </Show>
        </span>
    }
}
