//! Dark-mode toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Shows the action a click performs: the sun while dark, the moon while
/// light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let next = theme::toggle(ui.get_untracked().theme);
                ui.update(|u| u.theme = next);
            }
            title=move || ui.get().theme.toggle_title()
            aria-label=move || ui.get().theme.toggle_title()
        >
            {move || ui.get().theme.toggle_icon()}
        </button>
    }
}
