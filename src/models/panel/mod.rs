pub mod status;

pub use status::PanelStatus;

use crate::controller::{DetailToggleController, RowState};
use crate::error::{AnalysisError, ViewerError, ViewerResult};
use crate::models::analysis::{RankedResult, RawAnalysisResult};
use crate::models::view::{RowId, ViewModel};
use crate::render::render;
use crate::services::aggregate;
use crate::utils::{collect, run_log, timestamp};
use uuid::Uuid;

/// A finished run: ranked records, their view model and the row states.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    pub run_id: Uuid,
    pub finished_at: String,
    pub ranked: Vec<RankedResult>,
    pub view: ViewModel,
    pub controller: DetailToggleController,
}

impl ResultsTable {
    pub fn build(run_id: Uuid, raw: Vec<RawAnalysisResult>) -> Self {
        let ranked = aggregate(raw);
        let view = render(&ranked);
        let controller = DetailToggleController::attach(&view);
        ResultsTable {
            run_id,
            finished_at: timestamp(),
            ranked,
            view,
            controller,
        }
    }
}

/// The single results container. Each run overwrites it entirely.
#[derive(Debug, Clone, Default)]
pub enum ResultsPanel {
    #[default]
    Idle,
    Prompt,
    InProgress {
        run_id: Uuid,
        started_at: String,
        identifiers: usize,
    },
    Failed {
        run_id: Uuid,
        message: String,
        status_code: Option<u16>,
    },
    Table(ResultsTable),
}

impl ResultsPanel {
    pub fn status(&self) -> PanelStatus {
        match self {
            ResultsPanel::Idle => PanelStatus::Idle,
            ResultsPanel::Prompt => PanelStatus::Prompt,
            ResultsPanel::InProgress { .. } => PanelStatus::Processing,
            ResultsPanel::Failed { .. } => PanelStatus::Error,
            ResultsPanel::Table(_) => PanelStatus::Completed,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ResultsPanel::InProgress { .. })
    }
}

pub fn failure_message(error: &AnalysisError, service_url: &str) -> String {
    format!(
        "Error: {}. Is the analysis service running at {}? Check the URL list and try again.",
        error, service_url
    )
}

/// Last submitted input plus the results panel, guarded together by the
/// app state's lock.
#[derive(Debug, Default)]
pub struct Session {
    pub input: String,
    pub panel: ResultsPanel,
}

impl Session {
    /// Single-flight entry point: claims the panel for a new run.
    ///
    /// Fails with `Busy` while another run is outstanding (the panel is left
    /// untouched) and with `EmptyInput` when no identifier survives
    /// collection (the panel shows the prompt and no request must be made).
    pub fn begin_run(&mut self, raw_input: &str) -> ViewerResult<(Uuid, Vec<String>)> {
        if self.panel.is_busy() {
            return Err(ViewerError::Busy);
        }

        self.input = raw_input.to_string();
        let identifiers = collect(raw_input);
        if identifiers.is_empty() {
            self.panel = ResultsPanel::Prompt;
            return Err(ViewerError::EmptyInput);
        }

        let run_id = Uuid::new_v4();
        self.panel = ResultsPanel::InProgress {
            run_id,
            started_at: timestamp(),
            identifiers: identifiers.len(),
        };
        Ok((run_id, identifiers))
    }

    /// Aggregates and renders the batch, replacing the in-progress panel.
    pub fn finish_run(&mut self, run_id: Uuid, raw: Vec<RawAnalysisResult>) {
        if !self.owns_run(run_id) {
            run_log(&run_id, "discarding results of a run that no longer owns the panel");
            return;
        }
        let table = ResultsTable::build(run_id, raw);
        run_log(&run_id, &format!("ranked {} results", table.ranked.len()));
        self.panel = ResultsPanel::Table(table);
    }

    pub fn fail_run(&mut self, run_id: Uuid, error: &AnalysisError, service_url: &str) {
        if !self.owns_run(run_id) {
            run_log(&run_id, "discarding failure of a run that no longer owns the panel");
            return;
        }
        self.panel = ResultsPanel::Failed {
            run_id,
            message: failure_message(error, service_url),
            status_code: error.status_code(),
        };
    }

    pub fn toggle(&mut self, id: RowId) -> ViewerResult<RowState> {
        match &mut self.panel {
            ResultsPanel::Table(table) => table.controller.toggle(id),
            _ => Err(ViewerError::UnknownRow(id.index())),
        }
    }

    fn owns_run(&self, run_id: Uuid) -> bool {
        matches!(&self.panel, ResultsPanel::InProgress { run_id: current, .. } if *current == run_id)
    }
}
