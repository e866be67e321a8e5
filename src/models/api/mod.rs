pub mod params;

pub use params::{AnalyzeParams, AnalyzeRequest};
