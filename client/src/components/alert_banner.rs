//! Stack of transient success/error alerts.

use leptos::prelude::*;

use crate::actions::SearchActions;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let actions = expect_context::<SearchActions>();
    let alerts = actions.alerts();

    view! {
        <div class="alert-stack" role="status" aria-live="polite">
            <For each=move || alerts.get().items key=|alert| alert.id let:alert>
                <div class=format!("alert {}", alert.status.class())>
                    <span class="alert__message">{alert.message.clone()}</span>
                    <button
                        class="alert__close"
                        title="Dismiss"
                        on:click=move |_| actions.dismiss_alert(alert.id)
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
