// src/services/analysis_service/mod.rs

pub mod aggregate;
pub mod client;
pub mod run;

pub use aggregate::aggregate;
pub use client::AnalysisClient;
pub use run::{complete_run, start_run};
