//! Native HTTP client, for driving a session outside the browser.

use reqwest::multipart::{Form, Part};

use super::contract::{into_batch_result, parse_analyze_response, AnalysisClient};
use crate::config::{AppConfig, FILES_FIELD};
use crate::types::{AnalysisResult, AppError, AppResult, BatchResult, LocalFile};

/// Posts a batch of [`LocalFile`]s with `reqwest`.
///
/// No request timeout is configured; a stalled service keeps the batch
/// pending, same as in the browser.
#[derive(Clone, Debug)]
pub struct NativeAnalysisClient {
    client: reqwest::Client,
    analyze_url: String,
}

impl NativeAnalysisClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let user_agent = format!("LocalFileAnalyzer/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
        })
    }

    /// Upload every file under the same field in a single request.
    pub async fn analyze(&self, files: &[LocalFile]) -> AppResult<Vec<AnalysisResult>> {
        let form = files.iter().fold(Form::new(), |form, file| {
            form.part(
                FILES_FIELD,
                Part::bytes(file.content.clone()).file_name(file.name.clone()),
            )
        });

        let response = self
            .client
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        parse_analyze_response(status, &body)
    }
}

impl AnalysisClient<LocalFile> for NativeAnalysisClient {
    async fn submit_batch(&self, files: &[LocalFile]) -> BatchResult {
        into_batch_result(self.analyze(files).await)
    }
}
