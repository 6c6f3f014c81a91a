use super::*;

#[test]
fn export_toasts_name_the_format() {
    assert_eq!(export_success_text(ExportFormat::Json), "Exportado a JSON");
    assert_eq!(export_success_text(ExportFormat::Csv), "Exportado a CSV");
    assert_eq!(export_error_text(ExportFormat::Json), "Error al exportar JSON");
    assert_eq!(export_error_text(ExportFormat::Csv), "Error al exportar CSV");
}

#[cfg(not(feature = "csr"))]
#[test]
fn save_export_is_unavailable_outside_the_browser() {
    assert!(save_export(ExportFormat::Json, b"[]").is_err());
}
