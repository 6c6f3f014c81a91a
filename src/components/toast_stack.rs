//! Stacked toast notifications.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders every live toast; clicking one dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            role="status"
                            on:click=move |_| {
                                toasts.update(|t| {
                                    t.dismiss(id);
                                });
                            }
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
