//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - handles for the files a user selects
//! - **API Types** - analysis service request/response shapes
//! - **Batch Types** - normalized outcome of one submission
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// A file the user picked, as seen by the session and the clients.
///
/// The session only needs a name; the clients own the content.
pub trait FileHandle: Clone {
    /// File name as sent in the multipart part.
    fn file_name(&self) -> String;

    /// Content length in bytes.
    fn size(&self) -> u64;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// An in-memory file with its name and content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk, keeping only its final path component as name.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, content })
    }
}

impl FileHandle for LocalFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Total size of a selection in bytes.
pub fn total_size<F: FileHandle>(files: &[F]) -> u64 {
    files.iter().map(FileHandle::size).sum()
}

// =============================================================================
// API Types
// =============================================================================

/// Analysis of one submitted file.
///
/// `analysis` is whatever the service produced for that file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: String,
    pub analysis: serde_json::Value,
}

/// Success body of `POST /analyze/`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub results: Vec<AnalysisResult>,
}

// =============================================================================
// Batch Types
// =============================================================================

/// Message shown when the service gave no usable error detail.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Error analyzing files. Please check if the backend is running.";

/// Outcome of one batch submission.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchResult {
    /// Per-file results in the order the service returned them.
    Success(Vec<AnalysisResult>),
    /// Human-readable failure message.
    Failure(String),
}

impl BatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchResult::Success(_))
    }
}

impl From<AppResult<Vec<AnalysisResult>>> for BatchResult {
    fn from(result: AppResult<Vec<AnalysisResult>>) -> Self {
        match result {
            Ok(results) => BatchResult::Success(results),
            Err(e) => BatchResult::Failure(e.display_message()),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request could not be built locally.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Service unreachable or the transport gave up.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx body that does not match the analysis contract.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Non-2xx without a usable error detail.
    #[error("Server returned status {0}")]
    Status(u16),

    /// Non-2xx carrying an `error` detail.
    #[error("Server error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Reading a local file failed.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Text for the error banner.
    ///
    /// Only the service's own message is shown verbatim.
    pub fn display_message(&self) -> String {
        match self {
            AppError::Service { message, .. } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "results": [
                {"filename": "report.pdf", "analysis": {"summary": "Quarterly numbers", "pages": 4}},
                {"filename": "notes.docx", "analysis": {"error": "LLM API error", "details": "quota"}}
            ]
        }"#;

        let response: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].filename, "report.pdf");
        assert_eq!(response.results[0].analysis["pages"], json!(4));
        assert_eq!(response.results[1].analysis["error"], json!("LLM API error"));
    }

    #[test]
    fn test_only_service_errors_are_shown_verbatim() {
        let service = AppError::Service {
            status: 400,
            message: "Unsupported file type".into(),
        };
        assert_eq!(service.display_message(), "Unsupported file type");

        assert_eq!(AppError::Status(502).display_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            AppError::Network("connection refused".into()).display_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            AppError::MalformedResponse("missing field `results`".into()).display_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_batch_result_from_app_result() {
        let failed: BatchResult = Err(AppError::Status(500)).into();
        assert_eq!(failed, BatchResult::Failure(FALLBACK_ERROR_MESSAGE.to_string()));

        let ok: BatchResult = Ok(vec![]).into();
        assert!(ok.is_success());
    }

    #[test]
    fn test_local_file_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.7").unwrap();

        let local = LocalFile::from_path(&path).unwrap();
        assert_eq!(local.file_name(), "contract.pdf");
        assert_eq!(local.size(), 8);

        let missing = LocalFile::from_path(dir.path().join("missing.pdf"));
        assert!(matches!(missing, Err(AppError::Io(_))));
    }

    #[test]
    fn test_total_size() {
        let files = vec![LocalFile::new("a.pdf", vec![0u8; 3]), LocalFile::new("b.docx", vec![0u8; 5])];
        assert_eq!(total_size(&files), 8);
    }
}
