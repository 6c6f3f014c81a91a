//! Read-only detail view of a single problem.

#[cfg(test)]
#[path = "problem_detail_dialog_test.rs"]
mod problem_detail_dialog_test;

use leptos::prelude::*;

use crate::net::types::Problem;

/// Field rows shown in the dialog, in display order.
#[must_use]
pub fn detail_rows(problem: &Problem) -> Vec<(&'static str, String)> {
    vec![
        ("ID", problem.id.clone()),
        ("Tipo", problem.display_type().to_owned()),
        ("Título", problem.display_title().to_owned()),
        ("Dificultad", problem.display_difficulty()),
        ("Tema", problem.display_topic().to_owned()),
        ("Etiquetas", problem.tags_joined()),
        ("Enunciado", problem.statement_text().to_owned()),
        ("Solución", problem.solution_text().to_owned()),
    ]
}

#[component]
pub fn ProblemDetailDialog(problem: Problem, on_close: Callback<()>) -> impl IntoView {
    let rows = detail_rows(&problem);
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{problem.display_title().to_owned()}</h2>
                <dl class="detail-list">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt class="detail-list__label">{label}</dt>
                                <dd class="detail-list__value">{value}</dd>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
