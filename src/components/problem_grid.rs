//! Grid of problem cards driven by a [`GridView`].
//!
//! DESIGN
//! ======
//! The grid only renders; card actions go back through callbacks owned by
//! the page so no handler is global.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::problem_card::ProblemCard;
use crate::state::catalog::GridView;

#[component]
pub fn ProblemGrid(
    #[prop(into)] grid: Signal<GridView>,
    on_view: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    move || match grid.get() {
        GridView::Idle => ().into_any(),
        GridView::Spinner => view! {
            <div class="spinner" role="status" aria-label="Cargando"></div>
        }
        .into_any(),
        GridView::Empty(text) => view! { <p class="grid-message">{text}</p> }.into_any(),
        GridView::Error(text) => view! { <p class="grid-message grid-message--error">{text}</p> }.into_any(),
        GridView::Cards(problems) => view! {
            <div class="problem-grid">
                {problems
                    .into_iter()
                    .map(|problem| view! { <ProblemCard problem=problem on_view=on_view on_delete=on_delete /> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}
