//! Problem list tab with server-side filters.

use leptos::prelude::*;

use super::actions::{load_problems, open_detail};
use crate::components::problem_grid::ProblemGrid;
use crate::net::types::{KNOWN_PROBLEM_TYPES, problem_type_label};
use crate::state::catalog::{
    CatalogState, EMPTY_LIST_TEXT, LIST_ERROR_TEXT, grid_view, parse_difficulty_filter, parse_type_filter,
};
use crate::state::toast::ToastState;

#[component]
pub fn ListPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let grid = Signal::derive(move || catalog.with(|c| grid_view(&c.list, EMPTY_LIST_TEXT, LIST_ERROR_TEXT)));
    let on_view = Callback::new(move |id: String| open_detail(id, catalog, toasts));
    let on_delete = Callback::new(move |id: String| catalog.update(|c| c.request_delete(id)));

    view! {
        <section class="panel" id="list">
            <div class="filters">
                <label class="filters__field">
                    "Tipo"
                    <select on:change=move |ev| {
                        let kind = parse_type_filter(&event_target_value(&ev));
                        catalog.update(|c| c.filter.problem_type = kind);
                        load_problems(catalog, toasts);
                    }>
                        <option value="">"Todos"</option>
                        {KNOWN_PROBLEM_TYPES
                            .into_iter()
                            .map(|kind| view! { <option value=kind>{problem_type_label(kind)}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="filters__field">
                    "Dificultad"
                    <select on:change=move |ev| {
                        let difficulty = parse_difficulty_filter(&event_target_value(&ev));
                        catalog.update(|c| c.filter.difficulty = difficulty);
                        load_problems(catalog, toasts);
                    }>
                        <option value="">"Todas"</option>
                        {(1..=5_u8)
                            .map(|d| view! { <option value=d.to_string()>{d.to_string()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn" on:click=move |_| load_problems(catalog, toasts)>
                    "Recargar"
                </button>
            </div>
            <ProblemGrid grid=grid on_view=on_view on_delete=on_delete />
        </section>
    }
}
