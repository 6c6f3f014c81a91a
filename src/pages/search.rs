//! Full-text search tab.

use leptos::prelude::*;

use super::actions::{open_detail, run_search};
use crate::components::problem_grid::ProblemGrid;
use crate::state::catalog::{CatalogState, EMPTY_SEARCH_TEXT, SEARCH_ERROR_TEXT, grid_view, validate_search_query};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::notify::notify;

#[component]
pub fn SearchPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let grid = Signal::derive(move || catalog.with(|c| grid_view(&c.search, EMPTY_SEARCH_TEXT, SEARCH_ERROR_TEXT)));
    let on_view = Callback::new(move |id: String| open_detail(id, catalog, toasts));
    let on_delete = Callback::new(move |id: String| catalog.update(|c| c.request_delete(id)));

    let submit = Callback::new(move |()| {
        let raw = catalog.with_untracked(|c| c.search_query.clone());
        match validate_search_query(&raw) {
            Ok(query) => run_search(query, catalog, toasts),
            Err(warning) => notify(toasts, ToastKind::Warning, warning),
        }
    });

    view! {
        <section class="panel" id="search">
            <div class="search-box">
                <input
                    class="search-box__input"
                    type="search"
                    placeholder="Buscar problemas..."
                    prop:value=move || catalog.with(|c| c.search_query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        catalog.update(|c| c.search_query = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    on:click=move |_| submit.run(())
                    prop:disabled=move || catalog.with(|c| c.search.is_loading())
                >
                    "Buscar"
                </button>
            </div>
            <ProblemGrid grid=grid on_view=on_view on_delete=on_delete />
        </section>
    }
}
