//! Toast helper shared by every handler.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast and schedule its dismissal after the configured
/// `toast_duration_ms`.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let duration = crate::config::ClientConfig::from_build_env().toast_duration_ms;
        gloo_timers::future::TimeoutFuture::new(duration).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}
