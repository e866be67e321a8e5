mod de;
pub mod details;
pub mod ranked;
pub mod result;

pub use details::{PerformanceDetails, SecurityDetails, SeoDetails};
pub use ranked::{composite_score, RankedResult};
pub use result::RawAnalysisResult;
