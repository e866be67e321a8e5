use crate::controller::RowState;
use crate::models::{AppState, PanelStatus, RankedResult, ResultsPanel, RowId};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Debug, Clone)]
pub struct ExportedRow {
    pub rank: usize,
    pub state: RowState,
    #[serde(flatten)]
    pub result: RankedResult,
}

// JSON snapshot of the results panel
#[derive(Serialize, Debug, Clone)]
pub struct ResultsExport {
    pub status: PanelStatus,
    pub run_id: Option<Uuid>,
    pub timestamp: Option<String>,
    pub message: Option<String>,
    pub status_code: Option<u16>,
    pub results: Vec<ExportedRow>,
}

impl ResultsExport {
    pub fn from_panel(panel: &ResultsPanel) -> Self {
        let mut export = ResultsExport {
            status: panel.status(),
            run_id: None,
            timestamp: None,
            message: None,
            status_code: None,
            results: Vec::new(),
        };

        match panel {
            ResultsPanel::Idle | ResultsPanel::Prompt => {}
            ResultsPanel::InProgress {
                run_id, started_at, ..
            } => {
                export.run_id = Some(*run_id);
                export.timestamp = Some(started_at.clone());
            }
            ResultsPanel::Failed {
                run_id,
                message,
                status_code,
            } => {
                export.run_id = Some(*run_id);
                export.message = Some(message.clone());
                export.status_code = *status_code;
            }
            ResultsPanel::Table(table) => {
                export.run_id = Some(table.run_id);
                export.timestamp = Some(table.finished_at.clone());
                export.results = table
                    .ranked
                    .iter()
                    .enumerate()
                    .map(|(i, ranked)| ExportedRow {
                        rank: i + 1,
                        state: table.controller.state(RowId(i)).unwrap_or_default(),
                        result: ranked.clone(),
                    })
                    .collect();
            }
        }

        export
    }
}

pub async fn results_handler(State(state): State<Arc<AppState>>) -> Json<ResultsExport> {
    let session = state.session.lock().await;
    Json(ResultsExport::from_panel(&session.panel))
}
