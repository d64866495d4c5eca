//! View model derived from an [`UploadSession`].
//!
//! Components render a [`SessionView`] and never inspect the session
//! directly, so everything shown on screen is a pure function of state.

use serde_json::Value;

use crate::session::{SessionPhase, UploadSession};
use crate::types::FileHandle;

/// Trigger label while a batch is in flight.
pub const PENDING_LABEL: &str = "Analyzing…";

/// One rendered analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBlock {
    pub filename: String,
    /// Pretty-printed analysis, two-space indented.
    pub body: String,
}

/// Everything the page needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub pending: bool,
    pub trigger_label: String,
    pub trigger_enabled: bool,
    pub selected_files: Vec<String>,
    pub error_banner: Option<String>,
    pub results: Vec<ResultBlock>,
}

impl SessionView {
    pub fn from_session<F: FileHandle>(session: &UploadSession<F>) -> Self {
        let pending = session.is_pending();
        let count = session.selection().len();

        let (error_banner, results) = match session.phase() {
            SessionPhase::Failed(message) => (Some(message.clone()), Vec::new()),
            SessionPhase::Succeeded(results) => (
                None,
                results
                    .iter()
                    .map(|r| ResultBlock {
                        filename: r.filename.clone(),
                        body: pretty_analysis(&r.analysis),
                    })
                    .collect(),
            ),
            SessionPhase::Idle | SessionPhase::Pending => (None, Vec::new()),
        };

        Self {
            pending,
            trigger_label: trigger_label(pending, count),
            trigger_enabled: session.can_submit(),
            selected_files: session.selection().iter().map(FileHandle::file_name).collect(),
            error_banner,
            results,
        }
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

/// "Analyzing…" while pending, else "Analyze N file(s)".
pub fn trigger_label(pending: bool, count: usize) -> String {
    if pending {
        PENDING_LABEL.to_string()
    } else if count == 1 {
        "Analyze 1 file".to_string()
    } else {
        format!("Analyze {} files", count)
    }
}

/// Multi-line, two-space indented JSON for an analysis value.
pub fn pretty_analysis(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisResult, BatchResult, LocalFile, FALLBACK_ERROR_MESSAGE};
    use serde_json::json;

    fn session_with(names: &[&str]) -> UploadSession<LocalFile> {
        let mut session = UploadSession::new();
        session.select_files(names.iter().map(|n| LocalFile::new(*n, Vec::new())).collect());
        session
    }

    #[test]
    fn test_trigger_label_pluralization() {
        assert_eq!(trigger_label(false, 0), "Analyze 0 files");
        assert_eq!(trigger_label(false, 1), "Analyze 1 file");
        assert_eq!(trigger_label(false, 3), "Analyze 3 files");
        assert_eq!(trigger_label(true, 3), "Analyzing…");
    }

    #[test]
    fn test_trigger_disabled_without_selection_or_while_pending() {
        let mut session = session_with(&[]);
        assert!(!session.view().trigger_enabled);

        session = session_with(&["a.pdf"]);
        let view = session.view();
        assert!(view.trigger_enabled);
        assert_eq!(view.selected_files, vec!["a.pdf"]);

        session.begin_submission();
        let view = session.view();
        assert!(view.pending);
        assert!(!view.trigger_enabled);
        assert_eq!(view.trigger_label, "Analyzing…");
    }

    #[test]
    fn test_results_render_in_order_pretty_printed() {
        let mut session = session_with(&["a.pdf", "b.docx"]);
        session.begin_submission();
        session.complete_submission(BatchResult::Success(vec![
            AnalysisResult {
                filename: "a.pdf".into(),
                analysis: json!({"x": 1}),
            },
            AnalysisResult {
                filename: "b.docx".into(),
                analysis: json!({"y": 2}),
            },
        ]));

        let view = session.view();
        assert_eq!(view.error_banner, None);
        assert_eq!(
            view.results,
            vec![
                ResultBlock {
                    filename: "a.pdf".into(),
                    body: "{\n  \"x\": 1\n}".into(),
                },
                ResultBlock {
                    filename: "b.docx".into(),
                    body: "{\n  \"y\": 2\n}".into(),
                },
            ]
        );
    }

    #[test]
    fn test_failure_shows_banner_only() {
        let mut session = session_with(&["notes.txt"]);
        session.begin_submission();
        session.complete_submission(BatchResult::Failure("unsupported file type".into()));

        let view = session.view();
        assert_eq!(view.error_banner.as_deref(), Some("unsupported file type"));
        assert!(!view.has_results());
        assert_eq!(view.trigger_label, "Analyze 1 file");
    }

    #[test]
    fn test_empty_success_renders_nothing() {
        let mut session = session_with(&["a.pdf"]);
        session.begin_submission();
        session.complete_submission(BatchResult::Success(vec![]));

        let view = session.view();
        assert!(!view.has_results());
        assert!(view.error_banner.is_none());
    }

    #[test]
    fn test_results_survive_empty_reselection() {
        let mut session = session_with(&["a.pdf"]);
        session.begin_submission();
        session.complete_submission(BatchResult::Success(vec![AnalysisResult {
            filename: "a.pdf".into(),
            analysis: json!({"x": 1}),
        }]));

        session.select_files(vec![]);
        let view = session.view();
        assert!(!view.trigger_enabled);
        assert_eq!(view.results.len(), 1);
    }

    #[test]
    fn test_banner_never_stale_after_resubmission() {
        let mut session = session_with(&["notes.txt"]);
        session.begin_submission();
        session.complete_submission(BatchResult::Failure("unsupported file type".into()));

        session.select_files(vec![LocalFile::new("a.pdf", Vec::new())]);
        session.begin_submission();
        assert_eq!(session.view().error_banner, None);

        session.complete_submission(BatchResult::Failure(FALLBACK_ERROR_MESSAGE.into()));
        assert_eq!(
            session.view().error_banner.as_deref(),
            Some(FALLBACK_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_pretty_analysis_scalars_and_nesting() {
        assert_eq!(pretty_analysis(&json!("plain")), "\"plain\"");
        assert_eq!(
            pretty_analysis(&json!({"topics": ["tax", "audit"]})),
            "{\n  \"topics\": [\n    \"tax\",\n    \"audit\"\n  ]\n}"
        );
    }
}
