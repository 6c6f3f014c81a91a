//! Root application component with context providers and tab panels.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::problem_detail_dialog::ProblemDetailDialog;
use crate::components::status_bar::StatusBar;
use crate::components::tab_bar::TabBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast_stack::ToastStack;
use crate::pages::actions::{check_health, confirm_delete, load_problems};
use crate::pages::distribution::DistributionPage;
use crate::pages::list::ListPage;
use crate::pages::search::SearchPage;
use crate::pages::stats::StatsPage;
use crate::pages::transfer::{ExportPage, ImportPage};
use crate::state::catalog::{CatalogState, DELETE_PROMPT};
use crate::state::distribution::DistributionState;
use crate::state::toast::ToastState;
use crate::state::ui::{Tab, UiState};
use crate::util::theme;

/// Root application component.
///
/// Provides all shared state contexts, applies the initial theme and fires
/// the startup loads for the list tab and the status bar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState {
        theme: theme::read_initial(),
        ..UiState::default()
    });
    let catalog = RwSignal::new(CatalogState::default());
    let toasts = RwSignal::new(ToastState::default());
    let distribution = RwSignal::new(DistributionState::default());

    provide_context(ui);
    provide_context(catalog);
    provide_context(toasts);
    provide_context(distribution);

    theme::apply(ui.get_untracked().theme.is_dark());
    #[cfg(feature = "csr")]
    theme::watch_system(move |dark| {
        let changed = ui.try_update(|u| u.theme.system_changed(dark)).unwrap_or(false);
        if changed {
            theme::apply(dark);
        }
    });

    load_problems(catalog, toasts);
    check_health(ui);

    let on_delete_confirm = Callback::new(move |()| confirm_delete(catalog, toasts));
    let on_delete_cancel = Callback::new(move |()| catalog.update(CatalogState::cancel_delete));
    let on_detail_close = Callback::new(move |()| catalog.update(|c| c.detail = None));

    view! {
        <Title text="Banco de Problemas"/>

        <div class="app">
            <header class="app__header">
                <h1 class="app__title">"Banco de Problemas"</h1>
                <span class="app__spacer"></span>
                <ThemeToggle/>
            </header>
            <TabBar/>
            <main class="app__content">
                <Show when=move || ui.get().is_visible(Tab::List)>
                    <ListPage/>
                </Show>
                <Show when=move || ui.get().is_visible(Tab::Search)>
                    <SearchPage/>
                </Show>
                <Show when=move || ui.get().is_visible(Tab::Stats)>
                    <StatsPage/>
                </Show>
                <Show when=move || ui.get().is_visible(Tab::Export)>
                    <ExportPage/>
                </Show>
                <Show when=move || ui.get().is_visible(Tab::Import)>
                    <ImportPage/>
                </Show>
                <Show when=move || ui.get().is_visible(Tab::Distribution)>
                    <DistributionPage/>
                </Show>
            </main>
            <StatusBar/>
        </div>

        <Show when=move || catalog.with(|c| c.pending_delete.is_some())>
            <ConfirmDialog
                title="Eliminar problema"
                message=DELETE_PROMPT
                confirm_label="Eliminar"
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </Show>
        {move || {
            catalog
                .with(|c| c.detail.clone())
                .map(|problem| view! { <ProblemDetailDialog problem=problem on_close=on_detail_close/> })
        }}
        <ToastStack/>
    }
}
