// src/models/mod.rs

pub mod analysis;
pub mod api;
pub mod app;
pub mod panel;
pub mod view;

pub use analysis::{PerformanceDetails, RankedResult, RawAnalysisResult, SecurityDetails, SeoDetails};
pub use api::{AnalyzeParams, AnalyzeRequest};
pub use app::AppState;
pub use panel::{PanelStatus, ResultsPanel, ResultsTable, Session};
pub use view::{DetailItem, DetailPanel, DetailSection, DetailValue, RowId, SummaryRow, ToggleLabel, ViewModel};
