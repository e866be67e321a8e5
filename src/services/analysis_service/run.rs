use crate::error::{ViewerError, ViewerResult};
use crate::models::AppState;
use crate::utils::run_log;
use log::error;
use std::sync::Arc;
use uuid::Uuid;

/// Claims the results panel for a new run.
///
/// Returns the run id and the collected identifiers, or `EmptyInput`/`Busy`
/// without touching the service.
pub async fn start_run(state: &AppState, raw_input: &str) -> ViewerResult<(Uuid, Vec<String>)> {
    let (run_id, identifiers) = state.session.lock().await.begin_run(raw_input)?;
    run_log(
        &run_id,
        &format!("analyzing {} urls via {}", identifiers.len(), state.client.base_url()),
    );
    Ok((run_id, identifiers))
}

/// Calls the analysis service for a claimed run and publishes the outcome.
///
/// The lock is never held across the network call, so readers see either the
/// in-progress panel or a complete table.
pub async fn complete_run(
    state: Arc<AppState>,
    run_id: Uuid,
    identifiers: Vec<String>,
) -> ViewerResult<()> {
    match state.client.analyze(&identifiers).await {
        Ok(raw) => {
            run_log(&run_id, &format!("received {} records", raw.len()));
            state.session.lock().await.finish_run(run_id, raw);
            Ok(())
        }
        Err(e) => {
            error!("[run {}] analysis failed: {}", run_id, e);
            state
                .session
                .lock()
                .await
                .fail_run(run_id, &e, state.client.base_url());
            Err(ViewerError::Analysis(e))
        }
    }
}
