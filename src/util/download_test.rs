use super::*;

#[test]
fn export_filename_keeps_only_the_date() {
    assert_eq!(
        export_filename(ExportFormat::Json, "2026-10-16T08:30:00.000Z"),
        "problems_2026-10-16.json"
    );
    assert_eq!(
        export_filename(ExportFormat::Csv, "2026-01-02T23:59:59.999Z"),
        "problems_2026-01-02.csv"
    );
}

#[test]
fn export_filename_tolerates_date_only_input() {
    assert_eq!(export_filename(ExportFormat::Json, "2026-10-16"), "problems_2026-10-16.json");
}

#[test]
fn chart_filename_uses_epoch_millis() {
    assert_eq!(chart_filename(1_760_000_000_123), "distribution_1760000000123.png");
}
