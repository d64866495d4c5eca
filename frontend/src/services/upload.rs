//! Browser HTTP client: batch upload of the picked files to the service.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::contract::{into_batch_result, parse_analyze_response, AnalysisClient};
use crate::config::{AppConfig, FILES_FIELD};
use crate::types::{AnalysisResult, AppError, AppResult, BatchResult};

/// Posts a batch as `multipart/form-data` with `fetch`.
///
/// The body is a `FormData`, so the browser writes the content type and
/// boundary itself.
#[derive(Clone, Debug)]
pub struct HttpAnalysisClient {
    analyze_url: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            analyze_url: config.analyze_url(),
        }
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    /// Upload every file under the same field in a single request.
    pub async fn analyze(&self, files: &[File]) -> AppResult<Vec<AnalysisResult>> {
        let form_data = FormData::new().map_err(js_request_error)?;
        for file in files {
            form_data
                .append_with_blob_and_filename(FILES_FIELD, file, &file.name())
                .map_err(js_request_error)?;
        }

        let request = Request::post(&self.analyze_url)
            .body(form_data)
            .map_err(|e| AppError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        parse_analyze_response(status, &body)
    }
}

impl AnalysisClient<File> for HttpAnalysisClient {
    async fn submit_batch(&self, files: &[File]) -> BatchResult {
        into_batch_result(self.analyze(files).await)
    }
}

fn js_request_error(e: JsValue) -> AppError {
    AppError::Request(format!("{:?}", e))
}
