use serde_json::json;

use super::*;

fn ok_response() -> DistributionResponse {
    serde_json::from_value(json!({
        "success": true,
        "chart_type": "bar",
        "labels": [0.0, 0.25, 0.5],
        "datasets": [{"label": "Frecuencia", "data": [4, 4, 8]}],
        "statistics": {
            "min": 0.0,
            "max": 15.9375,
            "epsilon": 0.0625,
            "total_bits": 8,
            "total_numbers": 1048576,
            "gap_type": "uniforme"
        }
    }))
    .unwrap()
}

fn failed_response(error: Option<&str>) -> DistributionResponse {
    DistributionResponse {
        success: false,
        error: error.map(str::to_owned),
        ..DistributionResponse::default()
    }
}

// =============================================================
// Form
// =============================================================

#[test]
fn form_defaults_to_four_four_unsigned() {
    let form = DistributionForm::default();
    assert_eq!(
        form.to_request().unwrap(),
        DistributionRequest {
            exponent_bits: 4,
            fraction_bits: 4,
            representation: Representation::Unsigned,
        }
    );
}

#[test]
fn form_rejects_non_numeric_bits() {
    let form = DistributionForm {
        exponent_bits: "cuatro".to_owned(),
        ..DistributionForm::default()
    };
    assert_eq!(form.to_request(), Err(INVALID_BITS));
}

#[test]
fn invalid_form_fails_without_request() {
    let mut state = DistributionState::default();
    state.form.fraction_bits = "-1".to_owned();
    assert!(state.begin().is_none());
    assert_eq!(state.status_text().unwrap(), format!("❌ Error: {INVALID_BITS}"));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn success_fills_stats_and_chart() {
    let mut state = DistributionState::default();
    let pending = state.begin().unwrap();
    assert_eq!(state.status_text().as_deref(), Some(LOADING_TEXT));

    state.apply_response(pending, Ok(ok_response()));

    assert!(state.status_text().is_none());
    let chart = state.chart.as_ref().unwrap();
    assert_eq!(chart.kind, "bar");
    assert_eq!(chart.title, "Distribución de Números en Punto Fijo (E=4, F=4, unsigned)");
    assert_eq!(chart.labels.len(), 3);
    assert_eq!(state.analysis.value().unwrap().total_numbers, 1_048_576);
}

#[test]
fn unsuccessful_response_reports_error_and_creates_no_chart() {
    let mut state = DistributionState::default();
    let pending = state.begin().unwrap();

    state.apply_response(pending, Ok(failed_response(Some("invalid range"))));

    assert!(state.status_text().unwrap().contains("invalid range"));
    assert!(!state.has_chart());
}

#[test]
fn unsuccessful_response_keeps_previous_chart() {
    let mut state = DistributionState::default();
    let first = state.begin().unwrap();
    state.apply_response(first, Ok(ok_response()));
    let before = state.chart.clone();

    let second = state.begin().unwrap();
    state.apply_response(second, Ok(failed_response(None)));

    assert_eq!(state.chart, before);
    assert_eq!(state.status_text().unwrap(), format!("❌ Error: {UNKNOWN_ERROR}"));
}

#[test]
fn http_error_is_shown_inline() {
    let mut state = DistributionState::default();
    let pending = state.begin().unwrap();
    state.apply_response(pending, Err("Error HTTP: 500".to_owned()));
    assert_eq!(state.status_text().unwrap(), "❌ Error: Error HTTP: 500");
    assert!(!state.has_chart());
}

#[test]
fn stale_response_is_ignored() {
    let mut state = DistributionState::default();
    let stale = state.begin().unwrap();
    let fresh = state.begin().unwrap();

    state.apply_response(fresh, Err("Error HTTP: 502".to_owned()));
    state.apply_response(stale, Ok(ok_response()));

    assert!(!state.has_chart());
    assert_eq!(state.status_text().unwrap(), "❌ Error: Error HTTP: 502");
}

#[test]
fn response_after_reset_is_ignored() {
    let mut state = DistributionState::default();
    let pending = state.begin().unwrap();
    state.reset();
    state.apply_response(pending, Ok(ok_response()));
    assert!(!state.has_chart());
    assert!(state.status_text().is_none());
}

// =============================================================
// Chart revision
// =============================================================

#[test]
fn unrelated_updates_do_not_redraw_chart() {
    let mut state = DistributionState::default();
    let pending = state.begin().unwrap();
    state.apply_response(pending, Ok(ok_response()));
    let drawn = state.chart_revision;

    state.form.exponent_bits = "6".to_owned();
    state.form.representation = Representation::TwosComplement;
    let failed = state.begin().unwrap();
    state.apply_response(failed, Ok(failed_response(Some("E demasiado grande"))));
    let http = state.begin().unwrap();
    state.apply_response(http, Err("Error HTTP: 500".to_owned()));
    state.set_chart_kind(ChartKind::Line);

    assert_eq!(state.chart_revision, drawn);
    assert!(state.has_chart());
}

#[test]
fn new_chart_and_reset_redraw() {
    let mut state = DistributionState::default();
    let start = state.chart_revision;

    let pending = state.begin().unwrap();
    state.apply_response(pending, Ok(ok_response()));
    assert_eq!(state.chart_revision, start + 1);

    state.reset();
    assert_eq!(state.chart_revision, start + 2);
}

#[test]
fn switched_kind_survives_until_next_chart() {
    let mut state = DistributionState::default();
    let pending = state.begin().unwrap();
    state.apply_response(pending, Ok(ok_response()));

    state.set_chart_kind(ChartKind::Line);
    assert_eq!(state.rendered_chart().unwrap().kind, "line");
    assert_eq!(state.chart.as_ref().unwrap().kind, "bar");

    let next = state.begin().unwrap();
    state.apply_response(next, Ok(ok_response()));
    assert_eq!(state.chart_kind, None);
    assert_eq!(state.rendered_chart().unwrap().kind, "bar");
}

#[test]
fn kind_switch_without_chart_is_ignored() {
    let mut state = DistributionState::default();
    state.set_chart_kind(ChartKind::Line);
    assert_eq!(state.chart_kind, None);
    assert!(state.rendered_chart().is_none());
}

// =============================================================
// Reset + formatting
// =============================================================

#[test]
fn reset_restores_defaults_and_clears_chart() {
    let mut state = DistributionState::default();
    state.form.exponent_bits = "7".to_owned();
    state.form.representation = Representation::TwosComplement;
    let pending = state.begin().unwrap();
    state.apply_response(pending, Ok(ok_response()));

    state.reset();

    assert_eq!(state.form, DistributionForm::default());
    assert!(!state.has_chart());
    assert!(state.analysis.value().is_none());
}

#[test]
fn stat_rows_format_values() {
    let stats = ok_response().statistics.unwrap();
    let rows = stat_rows(&stats);
    assert_eq!(
        rows,
        vec![
            ("Mín. Valor:", "0.000000".to_owned()),
            ("Máx. Valor:", "15.937500".to_owned()),
            ("Epsilon (Brecha):", "0.062500".to_owned()),
            ("Total Bits:", "8".to_owned()),
            ("Total Números:", "1,048,576".to_owned()),
            ("Tipo:", "uniforme".to_owned()),
        ]
    );
}
