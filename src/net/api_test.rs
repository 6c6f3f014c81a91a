use super::*;
use crate::net::types::Representation;

#[test]
fn list_request_carries_filters_and_limit() {
    let filter = ProblemFilter {
        problem_type: Some("karnaugh".to_owned()),
        difficulty: None,
    };
    let request = list_problems_request(&filter, 50);
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/problems");
    assert_eq!(request.describe(), "/problems?problem_type=karnaugh&limit=50");
    assert!(request.body.is_none());
}

#[test]
fn problem_request_formats_expected_path() {
    assert_eq!(problem_request("p-123").path, "/problems/p-123");
}

#[test]
fn delete_request_always_confirms() {
    let request = delete_problem_request("p-1");
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.describe(), "/problems/p-1?confirm=true");
}

#[test]
fn search_request_passes_query_unencoded_for_url_params() {
    let request = search_request("mapas & tablas", 20);
    assert_eq!(request.path, "/search");
    assert_eq!(
        request.query,
        vec![("q", "mapas & tablas".to_owned()), ("limit", "20".to_owned())]
    );
}

#[test]
fn stats_and_health_requests_are_plain_gets() {
    assert_eq!(stats_request().describe(), "/stats");
    assert_eq!(health_request().describe(), "/health");
}

#[test]
fn export_request_selects_variant_path() {
    assert_eq!(export_request(ExportFormat::Json, None).describe(), "/export/json");
    assert_eq!(
        export_request(ExportFormat::Csv, Some("msi")).describe(),
        "/export/csv?problem_type=msi"
    );
}

#[test]
fn distribution_request_posts_format_parameters() {
    let request = distribution_request(&DistributionRequest {
        exponent_bits: 4,
        fraction_bits: 4,
        representation: Representation::Unsigned,
    });
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/distribution/chart-data");
    assert_eq!(
        request.body,
        Some(serde_json::json!({"E": 4, "F": 4, "representation": "unsigned"}))
    );
}

#[test]
fn http_status_message_formats_status() {
    assert_eq!(http_status_message(500), "Error HTTP: 500");
}

#[test]
fn decode_body_reports_shape_errors() {
    let ok: Result<ProblemList, _> = decode_body(r#"{"problems": []}"#);
    assert!(ok.is_ok());
    let err: Result<ProblemList, _> = decode_body("not json");
    assert!(matches!(err, Err(ApiError::Decode(_))));
}

#[test]
fn export_format_metadata() {
    assert_eq!(ExportFormat::Json.extension(), "json");
    assert_eq!(ExportFormat::Csv.label(), "CSV");
    assert_eq!(ExportFormat::Csv.mime(), "text/csv");
}
