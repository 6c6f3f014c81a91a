//! Chart lifecycle behind a swappable rendering backend.
//!
//! DESIGN
//! ======
//! [`ChartController`] owns at most one live chart. Rendering always destroys
//! the previous instance before creating the next, and export/type changes
//! report [`ChartError::NoChart`] instead of touching a missing handle. The
//! browser build plugs in [`ChartJsBackend`]; tests use a recording backend.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde_json::json;

/// Everything needed to draw one distribution chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: String,
    pub title: String,
    pub labels: Vec<serde_json::Value>,
    pub datasets: Vec<serde_json::Value>,
}

/// Chart kinds offered by the type switcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [Self; 2] = [Self::Bar, Self::Line];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Barras",
            Self::Line => "Líneas",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("no hay gráfica")]
    NoChart,
    #[error("error de gráfica: {0}")]
    Render(String),
}

/// Rendering seam for the charting library.
pub trait ChartBackend {
    /// Where charts are drawn (a canvas in the browser).
    type Target;
    /// A live chart instance.
    type Handle;

    /// Create a chart from a full Chart.js-style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Render`] when the library rejects the config.
    fn create(&self, target: &Self::Target, config: &serde_json::Value) -> Result<Self::Handle, ChartError>;

    fn destroy(&self, handle: Self::Handle);

    /// Change the chart type in place and redraw.
    fn set_kind(&self, handle: &Self::Handle, kind: ChartKind);

    /// Serialize the chart to a PNG data URL.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Render`] when the canvas cannot be serialized.
    fn to_image(&self, handle: &Self::Handle) -> Result<String, ChartError>;
}

/// Owns the single live chart.
pub struct ChartController<B: ChartBackend> {
    backend: B,
    current: Option<B::Handle>,
}

impl<B: ChartBackend> ChartController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, current: None }
    }

    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.current.is_some()
    }

    /// Replace any live chart with one drawn from `spec`.
    ///
    /// # Errors
    ///
    /// Propagates backend creation failures; the previous chart is gone
    /// either way.
    pub fn render(&mut self, target: &B::Target, spec: &ChartSpec) -> Result<(), ChartError> {
        self.teardown();
        let handle = self.backend.create(target, &chart_config(spec))?;
        self.current = Some(handle);
        Ok(())
    }

    /// Destroy the live chart, if any.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.current.take() {
            self.backend.destroy(handle);
        }
    }

    /// # Errors
    ///
    /// [`ChartError::NoChart`] when nothing has been rendered.
    pub fn export_image(&self) -> Result<String, ChartError> {
        let handle = self.current.as_ref().ok_or(ChartError::NoChart)?;
        self.backend.to_image(handle)
    }

    /// # Errors
    ///
    /// [`ChartError::NoChart`] when nothing has been rendered.
    pub fn change_kind(&self, kind: ChartKind) -> Result<(), ChartError> {
        let handle = self.current.as_ref().ok_or(ChartError::NoChart)?;
        self.backend.set_kind(handle, kind);
        Ok(())
    }
}

/// Chart.js configuration for a distribution chart.
///
/// The tooltip label callback is not representable in JSON and is attached
/// by the browser backend.
#[must_use]
pub fn chart_config(spec: &ChartSpec) -> serde_json::Value {
    json!({
        "type": spec.kind,
        "data": {
            "labels": spec.labels,
            "datasets": spec.datasets,
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": {
                    "display": true,
                    "text": spec.title,
                    "font": { "size": 14, "weight": "bold" },
                },
                "legend": { "display": true, "position": "top" },
            },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "title": { "display": true, "text": "Frecuencia" },
                },
                "x": {
                    "title": { "display": true, "text": "Rango de Valores" },
                    "ticks": { "maxTicksLimit": 10 },
                },
            },
        },
    })
}

/// Tooltip line for one data point.
#[must_use]
pub fn tooltip_label(y: f64) -> String {
    format!("Frecuencia: {y:.2}")
}

// =============================================================================
// CHART.JS (browser)
// =============================================================================

#[cfg(feature = "csr")]
mod chartjs {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// Global `Chart` constructor loaded from the Chart.js script tag.
        pub type Chart;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

        #[wasm_bindgen(method)]
        pub fn destroy(this: &Chart);

        #[wasm_bindgen(method)]
        pub fn update(this: &Chart);

        #[wasm_bindgen(method, catch, js_name = toBase64Image)]
        pub fn to_base64_image(this: &Chart) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, getter)]
        pub fn config(this: &Chart) -> JsValue;
    }
}

/// Live Chart.js instance plus the tooltip callback it references.
#[cfg(feature = "csr")]
pub struct ChartJsHandle {
    chart: chartjs::Chart,
    _tooltip: wasm_bindgen::closure::Closure<dyn Fn(wasm_bindgen::JsValue) -> wasm_bindgen::JsValue>,
}

/// Draws through the global Chart.js library.
#[cfg(feature = "csr")]
pub struct ChartJsBackend;

#[cfg(feature = "csr")]
impl ChartJsBackend {
    fn js_err(err: &wasm_bindgen::JsValue) -> ChartError {
        ChartError::Render(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    /// Walk (creating as needed) `path` under `root` and return the last object.
    fn ensure_path(root: &wasm_bindgen::JsValue, path: &[&str]) -> Result<wasm_bindgen::JsValue, ChartError> {
        let mut node = root.clone();
        for key in path {
            let key = wasm_bindgen::JsValue::from_str(key);
            let mut next = js_sys::Reflect::get(&node, &key).map_err(|e| Self::js_err(&e))?;
            if next.is_undefined() || next.is_null() {
                next = js_sys::Object::new().into();
                js_sys::Reflect::set(&node, &key, &next).map_err(|e| Self::js_err(&e))?;
            }
            node = next;
        }
        Ok(node)
    }
}

#[cfg(feature = "csr")]
impl ChartBackend for ChartJsBackend {
    type Target = web_sys::HtmlCanvasElement;
    type Handle = ChartJsHandle;

    fn create(&self, target: &Self::Target, config: &serde_json::Value) -> Result<Self::Handle, ChartError> {
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let js_config = js_sys::JSON::parse(&config.to_string()).map_err(|e| Self::js_err(&e))?;

        let tooltip = Closure::<dyn Fn(JsValue) -> JsValue>::new(|context: JsValue| {
            let y = js_sys::Reflect::get(&context, &JsValue::from_str("parsed"))
                .and_then(|parsed| js_sys::Reflect::get(&parsed, &JsValue::from_str("y")))
                .ok()
                .and_then(|y| y.as_f64())
                .unwrap_or(0.0);
            JsValue::from_str(&tooltip_label(y))
        });
        let callbacks = Self::ensure_path(&js_config, &["options", "plugins", "tooltip", "callbacks"])?;
        js_sys::Reflect::set(&callbacks, &JsValue::from_str("label"), tooltip.as_ref())
            .map_err(|e| Self::js_err(&e))?;

        let chart = chartjs::Chart::new(target, &js_config).map_err(|e| Self::js_err(&e))?;
        Ok(ChartJsHandle { chart, _tooltip: tooltip })
    }

    fn destroy(&self, handle: Self::Handle) {
        handle.chart.destroy();
    }

    fn set_kind(&self, handle: &Self::Handle, kind: ChartKind) {
        let config = handle.chart.config();
        let _ = js_sys::Reflect::set(
            &config,
            &wasm_bindgen::JsValue::from_str("type"),
            &wasm_bindgen::JsValue::from_str(kind.as_str()),
        );
        handle.chart.update();
    }

    fn to_image(&self, handle: &Self::Handle) -> Result<String, ChartError> {
        handle
            .chart
            .to_base64_image()
            .map_err(|e| Self::js_err(&e))?
            .as_string()
            .ok_or_else(|| ChartError::Render("imagen vacía".to_owned()))
    }
}
