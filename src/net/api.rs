//! REST API helpers for the exam-bank backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): calls return [`ApiError::Unavailable`] so pure
//! request-building code can be exercised without a browser.
//!
//! ERROR HANDLING
//! ==============
//! [`api_call`] is the uniform path: on failure it pushes an error toast with
//! the server's `detail` (or a generic message) and hands the error back to
//! the caller, which only decides what to render inline. Export, import,
//! health and distribution calls bypass it because they report failures
//! their own way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    DistributionRequest, DistributionResponse, HealthStatus, Problem, ProblemEnvelope, ProblemList, RepoStats,
    SearchResults, StatsEnvelope,
};
#[cfg(feature = "csr")]
use super::types::ImportSummary;
use crate::config::ClientConfig;
use crate::state::catalog::ProblemFilter;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::notify::notify;

/// HTTP verbs used by the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request relative to the API root.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Path plus raw (unencoded) query, for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Downloadable export variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }

    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

// =============================================================================
// REQUEST BUILDERS
// =============================================================================

pub(crate) fn list_problems_request(filter: &ProblemFilter, limit: u32) -> ApiRequest {
    let mut request = ApiRequest::new(Method::Get, "/problems");
    request.query = filter.query_pairs();
    request.with_query("limit", limit.to_string())
}

pub(crate) fn problem_request(id: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("/problems/{id}"))
}

pub(crate) fn delete_problem_request(id: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/problems/{id}")).with_query("confirm", "true")
}

pub(crate) fn search_request(query: &str, limit: u32) -> ApiRequest {
    ApiRequest::new(Method::Get, "/search")
        .with_query("q", query)
        .with_query("limit", limit.to_string())
}

pub(crate) fn stats_request() -> ApiRequest {
    ApiRequest::new(Method::Get, "/stats")
}

pub(crate) fn health_request() -> ApiRequest {
    ApiRequest::new(Method::Get, "/health")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn export_request(format: ExportFormat, problem_type: Option<&str>) -> ApiRequest {
    let request = ApiRequest::new(Method::Get, format!("/export/{}", format.extension()));
    match problem_type {
        Some(kind) => request.with_query("problem_type", kind),
        None => request,
    }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn distribution_request(params: &DistributionRequest) -> ApiRequest {
    let mut request = ApiRequest::new(Method::Post, "/distribution/chart-data");
    request.body = serde_json::to_value(params).ok();
    request
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn http_status_message(status: u16) -> String {
    format!("Error HTTP: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "csr")]
fn build_request(config: &ClientConfig, request: &ApiRequest) -> Result<gloo_net::http::Request, ApiError> {
    use gloo_net::http::Request;

    let url = config.url(&request.path);
    let builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Delete => Request::delete(&url),
    }
    .header("Content-Type", "application/json")
    .query(request.query.iter().map(|(k, v)| (*k, v.as_str())));

    let built = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    };
    built.map_err(|e| ApiError::Transport(e.to_string()))
}

/// Send a request and return the raw response status and body text.
#[cfg(feature = "csr")]
async fn send_text(request: &ApiRequest) -> Result<(u16, String), ApiError> {
    let config = ClientConfig::from_build_env();
    log::debug!("api {:?} {}", request.method, request.describe());
    let response = build_request(&config, request)?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((status, text))
}

/// Perform a JSON request without any UI side effects.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with the body's `detail` for non-OK statuses,
/// [`ApiError::Transport`] when no response arrives and
/// [`ApiError::Decode`] for unexpected bodies.
pub async fn request_json<T: DeserializeOwned>(request: &ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (status, text) = send_text(request).await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::from_response(status, &text));
        }
        decode_body(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Perform a JSON request, surfacing any failure as an error toast.
///
/// # Errors
///
/// Re-signals the [`ApiError`] after the toast has been shown.
pub async fn api_call<T: DeserializeOwned>(toasts: RwSignal<ToastState>, request: ApiRequest) -> Result<T, ApiError> {
    let result = request_json(&request).await;
    if let Err(err) = &result {
        leptos::logging::warn!("api {} failed: {err}", request.describe());
        notify(toasts, ToastKind::Error, err.to_string());
    }
    result
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// `GET /problems`.
///
/// # Errors
///
/// See [`api_call`].
pub async fn fetch_problems(toasts: RwSignal<ToastState>, filter: &ProblemFilter) -> Result<Vec<Problem>, ApiError> {
    let limit = ClientConfig::from_build_env().list_limit;
    let list: ProblemList = api_call(toasts, list_problems_request(filter, limit)).await?;
    Ok(list.problems)
}

/// `GET /problems/{id}`.
///
/// # Errors
///
/// See [`api_call`].
pub async fn fetch_problem(toasts: RwSignal<ToastState>, id: &str) -> Result<Problem, ApiError> {
    let envelope: ProblemEnvelope = api_call(toasts, problem_request(id)).await?;
    Ok(envelope.problem)
}

/// `DELETE /problems/{id}?confirm=true`.
///
/// # Errors
///
/// See [`api_call`].
pub async fn delete_problem(toasts: RwSignal<ToastState>, id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = api_call(toasts, delete_problem_request(id)).await?;
    Ok(())
}

/// `GET /search?q=`.
///
/// # Errors
///
/// See [`api_call`].
pub async fn search_problems(toasts: RwSignal<ToastState>, query: &str) -> Result<Vec<Problem>, ApiError> {
    let limit = ClientConfig::from_build_env().search_limit;
    let results: SearchResults = api_call(toasts, search_request(query, limit)).await?;
    Ok(results.results)
}

/// `GET /stats`.
///
/// # Errors
///
/// See [`api_call`].
pub async fn fetch_stats(toasts: RwSignal<ToastState>) -> Result<RepoStats, ApiError> {
    let envelope: StatsEnvelope = api_call(toasts, stats_request()).await?;
    Ok(envelope.stats)
}

/// `GET /health`. Failures are reported by the status bar, not toasts.
///
/// # Errors
///
/// See [`request_json`].
pub async fn fetch_health() -> Result<HealthStatus, ApiError> {
    request_json(&health_request()).await
}

/// `GET /export/{json|csv}` as raw bytes.
///
/// # Errors
///
/// Returns an error on transport failure or a non-OK status.
pub async fn download_export(format: ExportFormat, problem_type: Option<&str>) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let config = ClientConfig::from_build_env();
        let request = export_request(format, problem_type);
        let response = build_request(&config, &request)?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
                message: "Error en descarga".to_owned(),
            });
        }
        response
            .binary()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (format, problem_type);
        Err(ApiError::Unavailable)
    }
}

/// `POST /import` with the file as multipart form data and duplicate
/// skipping enabled.
///
/// # Errors
///
/// Returns an error on transport failure, a non-OK status or an
/// undecodable body.
#[cfg(feature = "csr")]
pub async fn upload_import(file: &web_sys::File) -> Result<ImportSummary, ApiError> {
    let transport = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(transport)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(transport)?;
    form.append_with_str("skip_duplicates", "true").map_err(transport)?;

    let config = ClientConfig::from_build_env();
    let response = gloo_net::http::Request::post(&config.url("/import"))
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_response(status, &text));
    }
    decode_body(&text)
}

/// `POST /distribution/chart-data`.
///
/// Non-OK statuses become `Error HTTP: {status}` rather than the body's
/// detail; `success: false` bodies are returned as-is for the caller.
///
/// # Errors
///
/// Returns an error on transport failure, a non-OK status or an
/// undecodable body.
pub async fn analyze_distribution(params: &DistributionRequest) -> Result<DistributionResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (status, text) = send_text(&distribution_request(params)).await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Server {
                status,
                message: http_status_message(status),
            });
        }
        decode_body(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = params;
        Err(ApiError::Unavailable)
    }
}
