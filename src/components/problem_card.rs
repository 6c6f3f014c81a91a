//! Card for one problem in the list and search grids.

use leptos::prelude::*;

use crate::net::types::Problem;

#[component]
pub fn ProblemCard(problem: Problem, on_view: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let title = problem.display_title().to_owned();
    let statement = problem.statement_text().to_owned();
    let kind = problem.display_type().to_owned();
    let difficulty = format!("Dificultad: {}", problem.display_difficulty());
    let topic = format!("Tema: {}", problem.display_topic());
    let view_id = problem.id.clone();
    let delete_id = problem.id;

    view! {
        <article class="problem-card">
            <h3 class="problem-card__title">{title}</h3>
            <p class="problem-card__statement">{statement}</p>
            <div class="problem-card__meta">
                <span class="badge badge--type">{kind}</span>
                <span class="badge badge--difficulty">{difficulty}</span>
                <span class="problem-card__topic">{topic}</span>
            </div>
            <div class="problem-card__actions">
                <button class="btn btn--small" on:click=move |_| on_view.run(view_id.clone())>
                    "Ver"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| on_delete.run(delete_id.clone())
                    title="Eliminar problema"
                >
                    "Borrar"
                </button>
            </div>
        </article>
    }
}
