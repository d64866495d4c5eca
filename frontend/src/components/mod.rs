//! UI Components for the Local File Analyzer.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`UploadSection`] - File picker and analyze trigger
//! - [`ErrorBanner`] - Batch-level failure message
//! - [`ResultsSection`] - One block per analyzed file

mod hero;
mod upload;
mod banner;
mod results;

pub use hero::*;
pub use upload::*;
pub use banner::*;
pub use results::*;
