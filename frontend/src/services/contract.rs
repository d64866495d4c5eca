//! The analysis service contract.
//!
//! [`AnalysisClient`] is the only way the session talks to the service.
//! Both clients funnel raw HTTP outcomes through [`parse_analyze_response`]
//! so the browser and native builds normalize errors identically.

use std::future::Future;

use serde_json::Value;

use crate::types::{AnalysisResult, AnalyzeResponse, AppError, AppResult, BatchResult, FileHandle};

/// Sends one batch to the analysis service.
///
/// Implementations issue exactly one request per call and never retry.
/// Futures are not required to be `Send`: the browser client runs on the
/// single WASM thread.
pub trait AnalysisClient<F: FileHandle> {
    fn submit_batch(&self, files: &[F]) -> impl Future<Output = BatchResult>;
}

/// Turn a status code and raw body into the analysis results.
pub fn parse_analyze_response(status: u16, body: &str) -> AppResult<Vec<AnalysisResult>> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<AnalyzeResponse>(body)
            .map(|response| response.results)
            .map_err(|e| AppError::MalformedResponse(e.to_string()));
    }

    match extract_error_detail(body) {
        Some(message) => Err(AppError::Service { status, message }),
        None => Err(AppError::Status(status)),
    }
}

/// The service's `error` field, when the body is JSON and it is a
/// non-empty string.
pub fn extract_error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("error")?.as_str()?;
    if message.trim().is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// Collapse a client result into a [`BatchResult`], mirroring failures to
/// the console.
pub fn into_batch_result(result: AppResult<Vec<AnalysisResult>>) -> BatchResult {
    if let Err(e) = &result {
        log::error!("Error: {}", e);
    }
    result.into()
}
