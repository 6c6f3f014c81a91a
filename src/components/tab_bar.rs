//! Top navigation tabs.

use leptos::prelude::*;

use crate::pages::actions::run_tab_load;
use crate::state::catalog::CatalogState;
use crate::state::toast::ToastState;
use crate::state::ui::{Tab, UiState};

/// One button per tab. Selecting a tab shows its panel and fires the load
/// that tab needs.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <nav class="tab-bar" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || ui.get().is_visible(tab)
                            role="tab"
                            data-tab=tab.id()
                            aria-selected=move || ui.get().is_visible(tab).to_string()
                            on:click=move |_| {
                                if let Some(load) = ui.try_update(|u| u.select_tab(tab)).flatten() {
                                    run_tab_load(load, catalog, toasts);
                                }
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
