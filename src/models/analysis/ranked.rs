use crate::models::analysis::result::RawAnalysisResult;
use serde::Serialize;

// pub struct for a record together with its composite score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub result: RawAnalysisResult,
    pub total: i64,
}

impl RankedResult {
    pub fn from_raw(result: RawAnalysisResult) -> Self {
        let total = composite_score(result.performance, result.security, result.seo);
        RankedResult { result, total }
    }
}

/// Mean of the three sub-scores rounded half-up.
///
/// A sum of integers divided by three is never exactly on a half, so adding
/// one before the floor division rounds correctly for negative sums too.
pub fn composite_score(performance: i64, security: i64, seo: i64) -> i64 {
    let sum = i128::from(performance) + i128::from(security) + i128::from(seo);
    (sum + 1).div_euclid(3) as i64
}
