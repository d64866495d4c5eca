//! Local File Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a batch of local documents to an
//! analysis service and shows the per-file results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent  (owns the UploadSession signal)                │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (picker + analyze trigger)               │
//! │  ├── ErrorBanner (when the last batch failed)               │
//! │  └── ResultsSection (when the last batch succeeded)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Service address resolution and UI constants
//! - [`types`] - Files, API shapes, batch outcome, errors
//! - [`session`] - The upload session state machine
//! - [`view`] - View model derived from the session
//! - [`services`] - Analysis service clients
//! - [`components`] - UI components

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod session;
pub mod view;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileHandle, LocalFile,
    // API
    AnalysisResult, AnalyzeResponse,
    // Batch
    BatchResult, FALLBACK_ERROR_MESSAGE,
    // Errors
    AppError, AppResult,
};

// Session
pub use session::{SessionPhase, UploadSession};
pub use view::{ResultBlock, SessionView, PENDING_LABEL};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Resolved once for the whole session
    let config = AppConfig::from_env();
    log::info!(
        "Analysis service: {} (override with {} at build time)",
        config.backend_url(),
        BACKEND_URL_ENV
    );
    let client = HttpAnalysisClient::new(&config);

    let session = create_rw_signal(UploadSession::<web_sys::File>::new());
    let session_view = create_memo(move |_| session.with(SessionView::from_session));

    view! {
        <div class="container">
            <Hero/>
            <UploadSection session=session session_view=session_view client=client/>
            <ErrorBanner session_view=session_view/>
            <ResultsSection session_view=session_view/>
        </div>
    }
}
