//! Application configuration.
//!
//! The analysis service address is resolved once at startup into an
//! [`AppConfig`] and handed to the components that need it. Business logic
//! never reads the environment directly.

/// Fallback analysis service base URL.
///
/// Points at the service's default local port.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Build-time variable overriding [`DEFAULT_BACKEND_URL`].
pub const BACKEND_URL_ENV: &str = "ANALYZER_BACKEND_URL";

/// Sub-path of the batch analysis endpoint.
pub const ANALYZE_PATH: &str = "/analyze/";

/// Multipart field name shared by every file of a batch.
pub const FILES_FIELD: &str = "files";

/// File types offered by the picker. The service has the final say.
pub const ACCEPTED_EXTENSIONS: &str = ".docx,.pdf";

/// Application name shown in the page header.
pub const APP_NAME: &str = "Local File Analyzer";

/// Resolved runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    backend_url: String,
}

impl AppConfig {
    /// Build a config for an explicit base URL.
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from `ANALYZER_BACKEND_URL` as captured at build
    /// time, falling back to [`DEFAULT_BACKEND_URL`].
    ///
    /// WASM has no process environment, so the override is baked in by the
    /// compiler (`ANALYZER_BACKEND_URL=https://... trunk build`).
    pub fn from_env() -> Self {
        Self::resolve(option_env!("ANALYZER_BACKEND_URL"))
    }

    /// Pick the override when it is present and non-blank.
    pub fn resolve(override_url: Option<&str>) -> Self {
        match override_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Full URL of the batch analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.backend_url, ANALYZE_PATH)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
