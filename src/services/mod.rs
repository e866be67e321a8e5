pub mod analysis_service;

pub use analysis_service::{aggregate, complete_run, start_run, AnalysisClient};
