//! Request orchestration shared by pages and the tab bar.
//!
//! Every load takes a token from its `Loadable` slot before the request goes
//! out and settles with it afterwards, so superseded responses are dropped.

use leptos::prelude::*;

use crate::net::api;
use crate::state::catalog::CatalogState;
use crate::state::loadable::RequestToken;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::{HealthView, TabLoad, UiState};
use crate::util::notify::notify;

pub const DELETED_TEXT: &str = "Problema eliminado";

/// Run the load a tab asks for when it is shown.
pub fn run_tab_load(load: TabLoad, catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    match load {
        TabLoad::Problems => load_problems(catalog, toasts),
        TabLoad::Stats => load_stats(catalog, toasts),
    }
}

pub fn load_problems(catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    let Some(token) = catalog.try_update(|c| c.list.begin()) else {
        return;
    };
    fetch_list(token, catalog, toasts);
}

/// Fetch the list with the current filter and settle `token` with it.
pub(crate) fn fetch_list(token: RequestToken, catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    let filter = catalog.with_untracked(|c| c.filter.clone());
    leptos::task::spawn_local(async move {
        let result = api::fetch_problems(toasts, &filter).await.map_err(|e| e.to_string());
        let _ = catalog.try_update(|c| c.list.settle(token, result));
    });
}

pub fn load_stats(catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    let Some(token) = catalog.try_update(|c| c.stats.begin()) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api::fetch_stats(toasts).await.map_err(|e| e.to_string());
        let _ = catalog.try_update(|c| c.stats.settle(token, result));
    });
}

/// Search for `query`, which must already be validated.
pub fn run_search(query: String, catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    let Some(token) = catalog.try_update(|c| c.search.begin()) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api::search_problems(toasts, &query).await.map_err(|e| e.to_string());
        let _ = catalog.try_update(|c| c.search.settle(token, result));
    });
}

/// Fetch one problem and open the detail dialog. Failures only toast.
pub fn open_detail(id: String, catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    leptos::task::spawn_local(async move {
        if let Ok(problem) = api::fetch_problem(toasts, &id).await {
            catalog.update(|c| c.detail = Some(problem));
        }
    });
}

/// Send the confirmed delete, if any, then toast and reload the list.
pub fn confirm_delete(catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    let Some(id) = catalog.try_update(CatalogState::confirm_delete).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        if api::delete_problem(toasts, &id).await.is_ok() {
            notify(toasts, ToastKind::Success, DELETED_TEXT);
            if let Some(token) = catalog.try_update(|c| c.after_delete(&id)) {
                fetch_list(token, catalog, toasts);
            }
        }
    });
}

/// Check `GET /health` for the status bar. Never toasts.
pub fn check_health(ui: RwSignal<UiState>) {
    leptos::task::spawn_local(async move {
        let health = match api::fetch_health().await {
            Ok(status) => HealthView::Reported(status),
            Err(err) => {
                leptos::logging::warn!("health check failed: {err}");
                HealthView::Unreachable
            }
        };
        ui.update(|u| u.health = health);
    });
}
