use crate::models::analysis::{RankedResult, RawAnalysisResult};

/// Scores every record and orders the batch best first.
///
/// Records with equal totals keep their relative order from the service
/// response. Sub-scores are not range-checked.
pub fn aggregate(raw: Vec<RawAnalysisResult>) -> Vec<RankedResult> {
    let mut ranked: Vec<RankedResult> = raw.into_iter().map(RankedResult::from_raw).collect();

    // stable, descending
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked
}
