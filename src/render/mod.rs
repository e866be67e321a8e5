pub mod details;
pub mod markup;

pub use details::{section, BackendInfo, DetailTemplate};
pub use markup::{page, results_panel, results_table};

use crate::models::analysis::RankedResult;
use crate::models::view::{DetailPanel, RowId, SummaryRow, ToggleLabel, ViewModel};

/// Builds the view model for an already ranked batch.
///
/// Row `i` gets rank `i + 1` and the id `RowId(i)`. Every detail panel starts
/// hidden with its toggle offering "Show". No re-sorting happens here.
pub fn render(ranked: &[RankedResult]) -> ViewModel {
    let rows = ranked
        .iter()
        .enumerate()
        .map(|(i, ranked)| summary_row(RowId(i), ranked))
        .collect();
    ViewModel { rows }
}

fn summary_row(id: RowId, ranked: &RankedResult) -> SummaryRow {
    let result = &ranked.result;
    SummaryRow {
        id,
        rank: id.index() + 1,
        url: result.url.clone(),
        performance: result.performance,
        security: result.security,
        seo: result.seo,
        total: ranked.total,
        toggle_label: ToggleLabel::Show,
        detail: DetailPanel {
            id,
            hidden: true,
            sections: vec![
                section(Some(&BackendInfo::of(result))),
                section(result.performance_details.as_ref()),
                section(result.security_details.as_ref()),
                section(result.seo_details.as_ref()),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{PerformanceDetails, RawAnalysisResult};
    use crate::services::aggregate;

    fn batch() -> Vec<RankedResult> {
        aggregate(vec![
            RawAnalysisResult {
                url: "a.com".to_string(),
                performance: 60,
                security: 90,
                seo: 75,
                performance_details: Some(PerformanceDetails {
                    latency_ms: 99.4,
                    ..Default::default()
                }),
                ..Default::default()
            },
            RawAnalysisResult {
                url: "b.com".to_string(),
                performance: 80,
                security: 80,
                seo: 80,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn rows_follow_ranked_order() {
        let view = render(&batch());
        assert_eq!(view.len(), 2);

        let first = &view.rows[0];
        assert_eq!((first.rank, first.url.as_str(), first.total), (1, "b.com", 80));
        assert_eq!(first.id, RowId(0));
        assert_eq!(first.id.to_string(), "details-0");

        let second = &view.rows[1];
        assert_eq!((second.rank, second.url.as_str(), second.total), (2, "a.com", 75));
        assert_eq!(
            (second.performance, second.security, second.seo),
            (60, 90, 75)
        );
    }

    #[test]
    fn panels_start_hidden_with_fixed_sections() {
        let view = render(&batch());
        for row in &view.rows {
            assert!(row.detail.hidden);
            assert_eq!(row.toggle_label, ToggleLabel::Show);
            assert_eq!(row.detail.id, row.id);
            let titles: Vec<&str> = row.detail.sections.iter().map(|s| s.title).collect();
            assert_eq!(
                titles,
                vec![
                    "Backend & Protocol",
                    "Performance Details",
                    "Security Headers",
                    "SEO Details"
                ]
            );
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let ranked = batch();
        assert_eq!(render(&ranked), render(&ranked));
    }

    #[test]
    fn empty_batch_renders_no_rows() {
        assert!(render(&[]).is_empty());
    }
}
