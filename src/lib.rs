//! Website ranking viewer.
//!
//! Forwards a batch of site identifiers to the analysis service, ranks the
//! returned records by their composite score and serves an expandable
//! comparison table.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

pub use config::Config;
pub use controller::{DetailToggleController, RowState};
pub use error::{AnalysisError, ViewerError, ViewerResult};
pub use models::{AppState, RankedResult, RawAnalysisResult, ViewModel};
pub use render::render;
pub use services::{aggregate, AnalysisClient};
pub use utils::collect;
