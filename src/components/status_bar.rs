//! Footer status bar showing backend health.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fed once at startup from `GET /health`. An unreachable backend shows
//! "sin conexión" here rather than as a toast.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use crate::state::ui::{HealthView, UiState};

pub const OFFLINE_TEXT: &str = "sin conexión";

#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let health = move || ui.get().health;

    view! {
        <footer class="status-bar">
            <span class=move || health_class(&health())>
                {move || health_label(&health())}
            </span>
            <span class="status-bar__item">{move || backend_label(&health())}</span>
            <span class="status-bar__item">{move || count_label(&health())}</span>
        </footer>
    }
}

fn health_class(health: &HealthView) -> &'static str {
    match health {
        HealthView::Reported(status) if status.is_healthy() => "status-bar__health status-bar__health--ok",
        HealthView::Unknown => "status-bar__health",
        _ => "status-bar__health status-bar__health--down",
    }
}

fn health_label(health: &HealthView) -> String {
    match health {
        HealthView::Unknown => "…".to_owned(),
        HealthView::Reported(status) if status.status.is_empty() => "unhealthy".to_owned(),
        HealthView::Reported(status) => status.status.clone(),
        HealthView::Unreachable => OFFLINE_TEXT.to_owned(),
    }
}

fn backend_label(health: &HealthView) -> String {
    match health {
        HealthView::Reported(status) => status.backend.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

fn count_label(health: &HealthView) -> String {
    match health {
        HealthView::Reported(status) => status
            .problems_count
            .map(|n| format!("{n} problemas"))
            .unwrap_or_default(),
        _ => String::new(),
    }
}
