//! Export and import tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both paths bypass the uniform API error handling: export reads the raw
//! body as bytes and import posts multipart form data, and each reports
//! failure with its own fixed toast instead of the server detail.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use leptos::prelude::*;

use crate::net::api::{self, ExportFormat};
use crate::net::types::{KNOWN_PROBLEM_TYPES, problem_type_label};
use crate::state::catalog::parse_type_filter;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::notify::notify;

pub const NO_FILE_WARNING: &str = "Selecciona un archivo";
pub const IMPORT_ERROR_TEXT: &str = "Error al importar archivo";

#[must_use]
pub fn export_success_text(format: ExportFormat) -> String {
    format!("Exportado a {}", format.label())
}

#[must_use]
pub fn export_error_text(format: ExportFormat) -> String {
    format!("Error al exportar {}", format.label())
}

#[component]
pub fn ExportPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let export_type = RwSignal::new(None::<String>);

    let export = move |format: ExportFormat| {
        let problem_type = export_type.get_untracked();
        leptos::task::spawn_local(async move {
            let saved = api::download_export(format, problem_type.as_deref())
                .await
                .map_err(|e| e.to_string())
                .and_then(|bytes| save_export(format, &bytes));
            match saved {
                Ok(()) => notify(toasts, ToastKind::Success, export_success_text(format)),
                Err(err) => {
                    leptos::logging::warn!("export {} failed: {err}", format.label());
                    notify(toasts, ToastKind::Error, export_error_text(format));
                }
            }
        });
    };

    view! {
        <section class="panel" id="export">
            <label class="filters__field">
                "Tipo"
                <select on:change=move |ev| export_type.set(parse_type_filter(&event_target_value(&ev)))>
                    <option value="">"Todos"</option>
                    {KNOWN_PROBLEM_TYPES
                        .into_iter()
                        .map(|kind| view! { <option value=kind>{problem_type_label(kind)}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <div class="transfer-actions">
                <button class="btn btn--primary" on:click=move |_| export(ExportFormat::Json)>
                    "Exportar JSON"
                </button>
                <button class="btn btn--primary" on:click=move |_| export(ExportFormat::Csv)>
                    "Exportar CSV"
                </button>
            </div>
        </section>
    }
}

fn save_export(format: ExportFormat, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use crate::util::download;
        let filename = download::export_filename(format, &download::now_iso());
        download::download_bytes(&filename, format.mime(), bytes)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (format, bytes);
        Err(crate::net::error::ApiError::Unavailable.to_string())
    }
}

#[component]
pub fn ImportPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "csr")]
    let catalog = expect_context::<RwSignal<crate::state::catalog::CatalogState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_import = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                notify(toasts, ToastKind::Warning, NO_FILE_WARNING);
                return;
            };
            leptos::task::spawn_local(async move {
                match api::upload_import(&file).await {
                    Ok(summary) => {
                        notify(toasts, ToastKind::Success, summary.toast_message());
                        input.set_value("");
                        let reload = catalog.try_update(crate::state::catalog::CatalogState::after_import);
                        if let Some(token) = reload {
                            super::actions::fetch_list(token, catalog, toasts);
                        }
                    }
                    Err(err) => {
                        log::warn!("import failed: {err}");
                        notify(toasts, ToastKind::Error, IMPORT_ERROR_TEXT);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = file_input;
            notify(toasts, ToastKind::Warning, NO_FILE_WARNING);
        }
    };

    view! {
        <section class="panel" id="import">
            <input class="file-input" type="file" accept=".json,.csv" node_ref=file_input />
            <button class="btn btn--primary" on:click=on_import>
                "Importar"
            </button>
        </section>
    }
}
