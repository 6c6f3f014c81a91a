//! Fixed-point distribution analysis tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form input and analysis results live in `DistributionState`; the live
//! Chart.js instance lives in a page-local `ChartController`. An effect keyed
//! on `chart_revision` keeps the two in step: a replaced chart redraws the
//! canvas, a cleared one tears it down. Nothing else in the state redraws.

#[cfg(test)]
#[path = "distribution_test.rs"]
mod distribution_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::api;
use crate::net::types::Representation;
use crate::state::distribution::{
    DistributionState, EXPORT_FAILED, NO_CHART_TO_CHANGE, NO_CHART_TO_EXPORT, stat_rows,
};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::chart::{ChartError, ChartKind};
use crate::util::notify::notify;

/// Toast for a chart operation that could not run.
fn chart_error_toast(err: &ChartError, no_chart_text: &'static str) -> (ToastKind, &'static str) {
    match err {
        ChartError::NoChart => (ToastKind::Warning, no_chart_text),
        ChartError::Render(_) => (ToastKind::Error, EXPORT_FAILED),
    }
}

#[component]
pub fn DistributionPage() -> impl IntoView {
    let dist = expect_context::<RwSignal<DistributionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let controller = StoredValue::new_local(crate::util::chart::ChartController::new(
        crate::util::chart::ChartJsBackend,
    ));

    #[cfg(feature = "csr")]
    let chart_revision = Memo::new(move |_| dist.with(|d| d.chart_revision));

    #[cfg(feature = "csr")]
    Effect::new(move || {
        chart_revision.track();
        let spec = dist.with_untracked(DistributionState::rendered_chart);
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        controller.update_value(|c| match spec {
            Some(spec) => {
                if let Err(err) = c.render(&canvas, &spec) {
                    log::error!("chart render failed: {err}");
                }
            }
            None => c.teardown(),
        });
    });

    #[cfg(feature = "csr")]
    on_cleanup(move || {
        controller.try_update_value(crate::util::chart::ChartController::teardown);
    });

    let report = move |err: &ChartError, no_chart_text: &'static str| {
        let (kind, text) = chart_error_toast(err, no_chart_text);
        notify(toasts, kind, text);
    };

    let on_analyze = move |_| {
        let Some(pending) = dist.try_update(DistributionState::begin).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::analyze_distribution(&pending.request)
                .await
                .map_err(|e| e.to_string());
            if let Err(err) = &result {
                leptos::logging::warn!("distribution analysis failed: {err}");
            }
            dist.update(|d| d.apply_response(pending, result));
        });
    };

    let on_reset = move |_| dist.update(DistributionState::reset);

    let on_export = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::download::{chart_filename, download_url, now_epoch_ms};
            match controller.with_value(crate::util::chart::ChartController::export_image) {
                Ok(url) => {
                    if let Err(err) = download_url(&url, &chart_filename(now_epoch_ms())) {
                        log::error!("chart download failed: {err}");
                        notify(toasts, ToastKind::Error, EXPORT_FAILED);
                    }
                }
                Err(err) => report(&err, NO_CHART_TO_EXPORT),
            }
        }
        #[cfg(not(feature = "csr"))]
        report(&ChartError::NoChart, NO_CHART_TO_EXPORT);
    };

    let on_kind = move |kind: ChartKind| {
        #[cfg(feature = "csr")]
        match controller.with_value(|c| c.change_kind(kind)) {
            Ok(()) => dist.update(|d| d.set_chart_kind(kind)),
            Err(err) => report(&err, NO_CHART_TO_CHANGE),
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = kind;
            report(&ChartError::NoChart, NO_CHART_TO_CHANGE);
        }
    };

    view! {
        <section class="panel" id="distribution">
            <div class="distribution-form">
                <label class="filters__field">
                    "E (bits)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || dist.with(|d| d.form.exponent_bits.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dist.update(|d| d.form.exponent_bits = value);
                        }
                    />
                </label>
                <label class="filters__field">
                    "F (bits)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || dist.with(|d| d.form.fraction_bits.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dist.update(|d| d.form.fraction_bits = value);
                        }
                    />
                </label>
                <label class="filters__field">
                    "Representación"
                    <select
                        prop:value=move || dist.with(|d| d.form.representation.as_str())
                        on:change=move |ev| {
                            let representation = Representation::parse(&event_target_value(&ev)).unwrap_or_default();
                            dist.update(|d| d.form.representation = representation);
                        }
                    >
                        {Representation::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="transfer-actions">
                    <button
                        class="btn btn--primary"
                        on:click=on_analyze
                        prop:disabled=move || dist.with(|d| d.analysis.is_loading())
                    >
                        "Analizar"
                    </button>
                    <button class="btn" on:click=on_reset>
                        "Limpiar"
                    </button>
                    <button class="btn" on:click=on_export>
                        "Exportar PNG"
                    </button>
                    {ChartKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button class="btn btn--small" on:click=move |_| on_kind(kind)>
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="distribution-stats">
                {move || {
                    dist.with(|d| {
                        if let Some(text) = d.status_text() {
                            let failed = text.starts_with('❌');
                            return view! {
                                <p class="distribution-stats__message" class:distribution-stats__message--error=failed>
                                    {text}
                                </p>
                            }
                            .into_any();
                        }
                        match d.analysis.value() {
                            Some(stats) => view! {
                                <div class="stat-boxes">
                                    {stat_rows(stats)
                                        .into_iter()
                                        .map(|(label, value)| {
                                            view! {
                                                <div class="stat-box">
                                                    <label>{label}</label>
                                                    <span>{value}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                            None => ().into_any(),
                        }
                    })
                }}
            </div>

            <div class="chart-container" class:chart-container--hidden=move || !dist.with(DistributionState::has_chart)>
                <canvas node_ref=canvas_ref></canvas>
            </div>
        </section>
    }
}
