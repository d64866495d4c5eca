//! Analysis service communication.
//!
//! # Services
//!
//! - [`contract`] - `AnalysisClient` trait and response normalization
//! - [`upload`] - browser client (`fetch` + `FormData`)
//! - `native` - `reqwest` client for non-wasm targets

pub mod contract;
pub mod upload;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use contract::*;
pub use upload::*;
#[cfg(not(target_arch = "wasm32"))]
pub use native::*;
