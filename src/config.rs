//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The frontend is a static bundle, so there is no runtime config file. The
//! API root is baked in at compile time from `EXAM_BANK_API_BASE` and falls
//! back to `/api`, which matches a backend served from the same origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default REST root when `EXAM_BANK_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Result cap sent with `GET /search`.
pub const SEARCH_LIMIT: u32 = 20;

/// Page size sent with `GET /problems`.
pub const LIST_LIMIT: u32 = 50;

/// Distribution form defaults, restored by "Limpiar".
pub const DEFAULT_EXPONENT_BITS: u32 = 4;
pub const DEFAULT_FRACTION_BITS: u32 = 4;

/// Static client settings resolved at compile time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub toast_duration_ms: u32,
    pub search_limit: u32,
    pub list_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            toast_duration_ms: TOAST_DURATION_MS,
            search_limit: SEARCH_LIMIT,
            list_limit: LIST_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Resolve the configuration from build-time environment variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("EXAM_BANK_API_BASE"))
    }

    /// Build a config with an optional API root override. Blank overrides
    /// are ignored.
    #[must_use]
    pub fn with_api_base(api_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_owned();
        }
        config
    }

    /// Join a relative API path onto the configured root.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.api_base)
    }
}
