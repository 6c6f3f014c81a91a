//! Distribution analysis form and result state.
//!
//! DESIGN
//! ======
//! The form keeps raw input strings so half-typed values survive re-renders;
//! they are validated only when an analysis starts. `chart` holds the spec
//! of the chart that should be on screen. `chart_revision` only moves when
//! that chart is replaced or cleared, so the page redraws on revision changes
//! and ignores form edits, failed analyses and in-place type switches. The
//! type picked through the switcher is kept in `chart_kind` so a redraw
//! after remounting shows the user's choice.

#[cfg(test)]
#[path = "distribution_test.rs"]
mod distribution_test;

use super::loadable::{LoadStatus, Loadable, RequestToken};
use crate::config::{DEFAULT_EXPONENT_BITS, DEFAULT_FRACTION_BITS};
use crate::net::types::{DistributionRequest, DistributionResponse, DistributionStatistics, Representation};
use crate::util::chart::{ChartKind, ChartSpec};
use crate::util::format::{fixed6, group_thousands};

pub const LOADING_TEXT: &str = "⏳ Analizando distribución...";
pub const UNKNOWN_ERROR: &str = "Error desconocido";
pub const INVALID_BITS: &str = "E y F deben ser enteros no negativos";
pub const NO_CHART_TO_EXPORT: &str = "No hay gráfica para exportar. Analiza una distribución primero.";
pub const NO_CHART_TO_CHANGE: &str = "No hay datos para cambiar. Analiza una distribución primero.";
pub const EXPORT_FAILED: &str = "Error al exportar la gráfica";

#[derive(Clone, Debug, PartialEq)]
pub struct DistributionForm {
    pub exponent_bits: String,
    pub fraction_bits: String,
    pub representation: Representation,
}

impl Default for DistributionForm {
    fn default() -> Self {
        Self {
            exponent_bits: DEFAULT_EXPONENT_BITS.to_string(),
            fraction_bits: DEFAULT_FRACTION_BITS.to_string(),
            representation: Representation::default(),
        }
    }
}

impl DistributionForm {
    /// # Errors
    ///
    /// Returns [`INVALID_BITS`] when E or F is not a non-negative integer.
    pub fn to_request(&self) -> Result<DistributionRequest, &'static str> {
        let parse = |raw: &str| raw.trim().parse::<u32>().map_err(|_| INVALID_BITS);
        Ok(DistributionRequest {
            exponent_bits: parse(&self.exponent_bits)?,
            fraction_bits: parse(&self.fraction_bits)?,
            representation: self.representation,
        })
    }
}

/// Chart heading for an analyzed format.
#[must_use]
pub fn chart_title(request: &DistributionRequest) -> String {
    format!(
        "Distribución de Números en Punto Fijo (E={}, F={}, {})",
        request.exponent_bits,
        request.fraction_bits,
        request.representation.as_str()
    )
}

/// Label/value rows of the statistics grid.
#[must_use]
pub fn stat_rows(stats: &DistributionStatistics) -> Vec<(&'static str, String)> {
    vec![
        ("Mín. Valor:", fixed6(stats.min)),
        ("Máx. Valor:", fixed6(stats.max)),
        ("Epsilon (Brecha):", fixed6(stats.epsilon)),
        ("Total Bits:", stats.total_bits.to_string()),
        ("Total Números:", group_thousands(stats.total_numbers)),
        ("Tipo:", stats.gap_type.clone()),
    ]
}

/// An analysis that has been validated and is ready to send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub token: RequestToken,
    pub request: DistributionRequest,
}

#[derive(Clone, Debug, Default)]
pub struct DistributionState {
    pub form: DistributionForm,
    pub analysis: Loadable<DistributionStatistics>,
    pub chart: Option<ChartSpec>,
    /// Type chosen with the switcher, overriding the response's type.
    pub chart_kind: Option<ChartKind>,
    /// Bumped whenever `chart` is replaced or cleared.
    pub chart_revision: u64,
}

impl DistributionState {
    /// Validate the form and mark the analysis as loading.
    ///
    /// Invalid input fails the panel without issuing a request.
    pub fn begin(&mut self) -> Option<PendingAnalysis> {
        match self.form.to_request() {
            Ok(request) => Some(PendingAnalysis {
                token: self.analysis.begin(),
                request,
            }),
            Err(message) => {
                let token = self.analysis.begin();
                self.analysis.settle(token, Err(message.to_owned()));
                None
            }
        }
    }

    /// Settle an analysis. Only a successful, current response replaces the
    /// chart; failures leave any existing chart as it was.
    pub fn apply_response(&mut self, pending: PendingAnalysis, result: Result<DistributionResponse, String>) {
        if !self.analysis.is_current(pending.token) {
            return;
        }
        match result.and_then(Self::accept) {
            Ok((stats, mut spec)) => {
                spec.title = chart_title(&pending.request);
                self.analysis.settle(pending.token, Ok(stats));
                self.replace_chart(Some(spec));
            }
            Err(message) => {
                self.analysis.settle(pending.token, Err(message));
            }
        }
    }

    fn accept(response: DistributionResponse) -> Result<(DistributionStatistics, ChartSpec), String> {
        if !response.success {
            return Err(response.error.unwrap_or_else(|| UNKNOWN_ERROR.to_owned()));
        }
        let stats = response.statistics.unwrap_or_default();
        let spec = ChartSpec {
            kind: response.chart_type.unwrap_or_else(|| "bar".to_owned()),
            title: String::new(),
            labels: response.labels,
            datasets: response.datasets,
        };
        Ok((stats, spec))
    }

    /// Restore defaults and drop the statistics and chart.
    pub fn reset(&mut self) {
        self.form = DistributionForm::default();
        self.analysis.clear();
        self.replace_chart(None);
    }

    fn replace_chart(&mut self, chart: Option<ChartSpec>) {
        self.chart = chart;
        self.chart_kind = None;
        self.chart_revision += 1;
    }

    /// Record an in-place type switch. Ignored when there is no chart.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        if self.chart.is_some() {
            self.chart_kind = Some(kind);
        }
    }

    /// The chart to draw, with any switcher choice applied.
    #[must_use]
    pub fn rendered_chart(&self) -> Option<ChartSpec> {
        let mut spec = self.chart.clone()?;
        if let Some(kind) = self.chart_kind {
            spec.kind = kind.as_str().to_owned();
        }
        Some(spec)
    }

    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    /// Inline text for the statistics panel when it is not showing the grid.
    #[must_use]
    pub fn status_text(&self) -> Option<String> {
        match &self.analysis.status {
            LoadStatus::Loading => Some(LOADING_TEXT.to_owned()),
            LoadStatus::Failed(message) => Some(format!("❌ Error: {message}")),
            LoadStatus::Idle | LoadStatus::Loaded(_) => None,
        }
    }
}
