//! Browser file downloads for exports and chart images.
//!
//! SYSTEM CONTEXT
//! ==============
//! Downloads go through a temporary hidden `<a download>` element. Byte
//! payloads are wrapped in a `Blob` object URL that is revoked right after
//! the click; chart images are already data URLs.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::api::ExportFormat;

/// `problems_YYYY-MM-DD.{ext}` from an ISO-8601 timestamp.
#[must_use]
pub fn export_filename(format: ExportFormat, iso_timestamp: &str) -> String {
    let date = iso_timestamp.split('T').next().unwrap_or(iso_timestamp);
    format!("problems_{date}.{}", format.extension())
}

/// `distribution_{epoch_ms}.png`.
#[must_use]
pub fn chart_filename(epoch_ms: u64) -> String {
    format!("distribution_{epoch_ms}.png")
}

/// Current time as an ISO-8601 UTC string.
#[cfg(feature = "csr")]
#[must_use]
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Current time in milliseconds since the Unix epoch.
#[cfg(feature = "csr")]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_epoch_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Save `bytes` as `filename`.
///
/// # Errors
///
/// Returns a message when the blob, object URL or anchor cannot be created.
#[cfg(feature = "csr")]
pub fn download_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    use web_sys::{Blob, BlobPropertyBag, Url};

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|_| "No se pudo crear el archivo".to_owned())?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| "No se pudo iniciar la descarga".to_owned())?;
    let result = click_download_link(&url, filename);
    let _ = Url::revoke_object_url(&url);
    result
}

/// Save an existing URL (e.g. a `data:` URL) as `filename`.
///
/// # Errors
///
/// Returns a message when the anchor cannot be created.
#[cfg(feature = "csr")]
pub fn download_url(url: &str, filename: &str) -> Result<(), String> {
    click_download_link(url, filename)
}

#[cfg(feature = "csr")]
fn click_download_link(url: &str, filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast as _;
    use web_sys::HtmlAnchorElement;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Documento no disponible")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "No se pudo crear el enlace")?
        .dyn_into()
        .map_err(|_| "No se pudo crear el enlace")?;
    anchor.set_href(url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    let body = document.body().ok_or("Documento sin body")?;
    body.append_child(&anchor).map_err(|_| "No se pudo insertar el enlace")?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    Ok(())
}
