use super::*;
use crate::net::types::HealthStatus;

fn reported(status: &str, backend: Option<&str>, count: Option<u64>) -> HealthView {
    HealthView::Reported(HealthStatus {
        status: status.to_owned(),
        backend: backend.map(str::to_owned),
        problems_count: count,
        error: None,
    })
}

#[test]
fn healthy_backend_shows_name_and_count() {
    let health = reported("healthy", Some("json"), Some(42));
    assert_eq!(health_label(&health), "healthy");
    assert!(health_class(&health).ends_with("--ok"));
    assert_eq!(backend_label(&health), "json");
    assert_eq!(count_label(&health), "42 problemas");
}

#[test]
fn unhealthy_backend_is_flagged_down() {
    let health = reported("unhealthy", None, None);
    assert_eq!(health_label(&health), "unhealthy");
    assert!(health_class(&health).ends_with("--down"));
    assert_eq!(backend_label(&health), "");
    assert_eq!(count_label(&health), "");
}

#[test]
fn unreachable_backend_shows_offline() {
    assert_eq!(health_label(&HealthView::Unreachable), OFFLINE_TEXT);
    assert!(health_class(&HealthView::Unreachable).ends_with("--down"));
}

#[test]
fn unknown_health_is_neutral() {
    assert_eq!(health_class(&HealthView::Unknown), "status-bar__health");
}
