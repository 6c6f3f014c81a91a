use std::cell::{Cell, RefCell};

use super::*;

#[derive(Default)]
struct RecordingBackend {
    next: Cell<u32>,
    events: RefCell<Vec<String>>,
    fail_create: Cell<bool>,
}

impl RecordingBackend {
    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl ChartBackend for &RecordingBackend {
    type Target = ();
    type Handle = u32;

    fn create(&self, _target: &(), config: &serde_json::Value) -> Result<u32, ChartError> {
        if self.fail_create.get() {
            return Err(ChartError::Render("boom".to_owned()));
        }
        let id = self.next.get() + 1;
        self.next.set(id);
        self.events
            .borrow_mut()
            .push(format!("create {id} {}", config["type"].as_str().unwrap_or("?")));
        Ok(id)
    }

    fn destroy(&self, handle: u32) {
        self.events.borrow_mut().push(format!("destroy {handle}"));
    }

    fn set_kind(&self, handle: &u32, kind: ChartKind) {
        self.events.borrow_mut().push(format!("kind {handle} {}", kind.as_str()));
    }

    fn to_image(&self, handle: &u32) -> Result<String, ChartError> {
        Ok(format!("data:image/png;base64,{handle}"))
    }
}

fn sample_chart(kind: &str) -> ChartSpec {
    ChartSpec {
        kind: kind.to_owned(),
        title: "Distribución de Números en Punto Fijo (E=4, F=4, unsigned)".to_owned(),
        labels: vec![json!(0.0), json!(0.5)],
        datasets: vec![json!({"label": "Frecuencia", "data": [1, 2]})],
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn render_replaces_previous_chart() {
    let backend = RecordingBackend::default();
    let mut controller = ChartController::new(&backend);

    controller.render(&(), &sample_chart("bar")).unwrap();
    controller.render(&(), &sample_chart("line")).unwrap();

    assert_eq!(backend.events(), vec!["create 1 bar", "destroy 1", "create 2 line"]);
    assert!(controller.has_chart());
}

#[test]
fn teardown_destroys_once() {
    let backend = RecordingBackend::default();
    let mut controller = ChartController::new(&backend);
    controller.render(&(), &sample_chart("bar")).unwrap();

    controller.teardown();
    controller.teardown();

    assert_eq!(backend.events(), vec!["create 1 bar", "destroy 1"]);
    assert!(!controller.has_chart());
}

#[test]
fn failed_create_leaves_no_chart() {
    let backend = RecordingBackend::default();
    let mut controller = ChartController::new(&backend);
    controller.render(&(), &sample_chart("bar")).unwrap();
    backend.fail_create.set(true);

    let err = controller.render(&(), &sample_chart("bar")).unwrap_err();

    assert_eq!(err, ChartError::Render("boom".to_owned()));
    assert!(!controller.has_chart());
}

// =============================================================
// Export + change kind
// =============================================================

#[test]
fn export_without_chart_is_an_error_not_a_panic() {
    let backend = RecordingBackend::default();
    let controller = ChartController::new(&backend);
    assert_eq!(controller.export_image(), Err(ChartError::NoChart));
    assert!(backend.events().is_empty());
}

#[test]
fn export_returns_data_url() {
    let backend = RecordingBackend::default();
    let mut controller = ChartController::new(&backend);
    controller.render(&(), &sample_chart("bar")).unwrap();
    assert_eq!(controller.export_image().unwrap(), "data:image/png;base64,1");
}

#[test]
fn change_kind_mutates_in_place() {
    let backend = RecordingBackend::default();
    let mut controller = ChartController::new(&backend);
    assert_eq!(controller.change_kind(ChartKind::Line), Err(ChartError::NoChart));

    controller.render(&(), &sample_chart("bar")).unwrap();
    controller.change_kind(ChartKind::Line).unwrap();

    assert_eq!(backend.events(), vec!["create 1 bar", "kind 1 line"]);
}

// =============================================================
// Config
// =============================================================

#[test]
fn chart_config_carries_axes_and_title() {
    let config = chart_config(&sample_chart("bar"));
    assert_eq!(config["type"], "bar");
    assert_eq!(config["data"]["labels"], json!([0.0, 0.5]));
    assert_eq!(
        config["options"]["plugins"]["title"]["text"],
        "Distribución de Números en Punto Fijo (E=4, F=4, unsigned)"
    );
    assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
    assert_eq!(config["options"]["scales"]["y"]["title"]["text"], "Frecuencia");
    assert_eq!(config["options"]["scales"]["x"]["title"]["text"], "Rango de Valores");
    assert_eq!(config["options"]["scales"]["x"]["ticks"]["maxTicksLimit"], 10);
}

#[test]
fn tooltip_label_has_two_decimals() {
    assert_eq!(tooltip_label(3.0), "Frecuencia: 3.00");
    assert_eq!(tooltip_label(0.126), "Frecuencia: 0.13");
}
