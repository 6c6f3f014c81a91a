//! Repository statistics tab.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{RepoStats, problem_type_label};
use crate::state::catalog::{CatalogState, STATS_ERROR_TEXT};
use crate::state::loadable::LoadStatus;
use crate::util::format::megabytes;

#[component]
pub fn StatsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <section class="panel" id="stats">
            {move || match catalog.with(|c| c.stats.status.clone()) {
                LoadStatus::Idle => ().into_any(),
                LoadStatus::Loading => view! { <div class="spinner" role="status"></div> }.into_any(),
                LoadStatus::Failed(_) => {
                    view! { <p class="grid-message grid-message--error">{STATS_ERROR_TEXT}</p> }.into_any()
                }
                LoadStatus::Loaded(stats) => view! { <StatsView stats=stats /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn StatsView(stats: RepoStats) -> impl IntoView {
    let footnote = repository_footnote(&stats);
    view! {
        <div class="stats-grid">
            <div class="stat-widget stat-widget--total">
                <span class="stat-widget__label">"Total de Problemas"</span>
                <span class="stat-widget__value">{stats.total}</span>
            </div>
            {stats
                .by_type
                .iter()
                .map(|entry| {
                    view! {
                        <div class="stat-widget">
                            <span class="stat-widget__label">{problem_type_label(&entry.key).to_owned()}</span>
                            <span class="stat-widget__value">{entry.count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        {difficulty_rows(&stats)
            .map(|rows| {
                view! {
                    <h3>"Por Dificultad"</h3>
                    <table class="stats-table">
                        <thead>
                            <tr>
                                <th>"Dificultad"</th>
                                <th>"Cantidad"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|(key, count)| {
                                    view! {
                                        <tr>
                                            <td>{key}</td>
                                            <td>{count}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
            })}
        {footnote.map(|text| view! { <p class="stats-footnote">{text}</p> })}
    }
}

/// Rows of the difficulty table; `None` hides the table entirely.
fn difficulty_rows(stats: &RepoStats) -> Option<Vec<(String, u64)>> {
    (!stats.by_difficulty.is_empty())
        .then(|| stats.by_difficulty.iter().map(|entry| (entry.key.clone(), entry.count)).collect())
}

/// "backend · location · size" line, when the backend reports any of them.
fn repository_footnote(stats: &RepoStats) -> Option<String> {
    let parts: Vec<String> = [
        stats.backend.clone(),
        stats.location.clone(),
        stats.size_mb.map(megabytes),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}
