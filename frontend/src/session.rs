//! Upload session state machine.
//!
//! ```text
//!   select_files: any phase, phase unchanged
//!
//!   Idle ──begin──▶ Pending ──complete(Success)──▶ Succeeded ──begin──▶ Pending
//!                      │
//!                      └────complete(Failure)────▶ Failed ─────begin──▶ Pending
//! ```
//!
//! `begin_submission` is accepted from every phase except `Pending`, and only
//! with a non-empty selection. Entering `Pending` drops whatever results or
//! error the previous batch left behind.

use crate::services::AnalysisClient;
use crate::types::{total_size, AnalysisResult, BatchResult, FileHandle};
use crate::view::SessionView;

/// Where the session is in the request lifecycle.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// One batch is in flight.
    Pending,
    /// Last batch succeeded.
    Succeeded(Vec<AnalysisResult>),
    /// Last batch failed with this message.
    Failed(String),
}

impl SessionPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionPhase::Pending)
    }
}

impl From<BatchResult> for SessionPhase {
    fn from(result: BatchResult) -> Self {
        match result {
            BatchResult::Success(results) => SessionPhase::Succeeded(results),
            BatchResult::Failure(message) => SessionPhase::Failed(message),
        }
    }
}

/// Session state: the current selection and the lifecycle phase.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSession<F> {
    selection: Vec<F>,
    phase: SessionPhase,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            selection: Vec::new(),
            phase: SessionPhase::Idle,
        }
    }
}

impl<F: FileHandle> UploadSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &[F] {
        &self.selection
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_pending()
    }

    /// True when a submission would actually send a request.
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.selection.is_empty()
    }

    /// Replace the selection wholesale. The phase is left untouched.
    pub fn select_files(&mut self, files: Vec<F>) {
        log::debug!("Selected {} file(s)", files.len());
        self.selection = files;
    }

    /// Enter `Pending` and hand back the batch to send.
    ///
    /// Returns `None` and changes nothing when the selection is empty or a
    /// batch is already in flight.
    pub fn begin_submission(&mut self) -> Option<Vec<F>> {
        if self.is_pending() {
            log::warn!("Submission ignored: a batch is already in flight");
            return None;
        }
        if self.selection.is_empty() {
            return None;
        }

        self.phase = SessionPhase::Pending;
        let batch = self.selection.clone();
        log::info!(
            "Submitting batch of {} file(s), {} bytes",
            batch.len(),
            total_size(&batch)
        );
        Some(batch)
    }

    /// Record the outcome of the in-flight batch and leave `Pending`.
    ///
    /// Returns `false` (and records nothing) when no batch is in flight.
    pub fn complete_submission(&mut self, result: BatchResult) -> bool {
        if !self.is_pending() {
            log::warn!("Batch outcome ignored: no submission in flight");
            return false;
        }

        match &result {
            BatchResult::Success(results) => {
                log::info!("Batch analyzed: {} result(s)", results.len());
            }
            BatchResult::Failure(message) => {
                log::warn!("Batch failed: {}", message);
            }
        }
        self.phase = result.into();
        true
    }

    /// Run one full submission against `client`.
    ///
    /// Returns `false` without calling the client when nothing could be
    /// submitted. On return the session is never `Pending`.
    pub async fn submit<C>(&mut self, client: &C) -> bool
    where
        C: AnalysisClient<F>,
    {
        let Some(batch) = self.begin_submission() else {
            return false;
        };
        let result = client.submit_batch(&batch).await;
        self.complete_submission(result)
    }

    /// Renderable snapshot of the current state.
    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }
}
