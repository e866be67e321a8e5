use crate::error::ViewerError;
use crate::models::{AnalyzeParams, AppState, RowId};
use crate::render::page;
use crate::services::{complete_run, start_run};
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::Html,
};
use log::{error, info, warn};
use std::sync::Arc;

type PageResponse = (StatusCode, Html<String>);

async fn current_page(state: &AppState, status: StatusCode) -> PageResponse {
    let session = state.session.lock().await;
    (status, Html(page(&session)))
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> PageResponse {
    current_page(&state, StatusCode::OK).await
}

/// Claims the panel and answers with the in-progress page right away. The
/// service call runs on its own task, so the page (which refreshes itself
/// while busy) moves on to the table or the error once the run settles.
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Form(params): Form<AnalyzeParams>,
) -> PageResponse {
    let status = match start_run(&state, &params.urls).await {
        Ok((run_id, identifiers)) => {
            tokio::task::spawn(complete_run(state.clone(), run_id, identifiers));
            StatusCode::ACCEPTED
        }
        Err(ViewerError::EmptyInput) => {
            info!("analyze requested with no urls");
            StatusCode::BAD_REQUEST
        }
        Err(ViewerError::Busy) => {
            warn!("analyze requested while a run is in progress");
            StatusCode::CONFLICT
        }
        Err(e) => {
            error!("could not start analysis run: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    current_page(&state, status).await
}

pub async fn toggle_handler(
    State(state): State<Arc<AppState>>,
    Path(row): Path<usize>,
) -> PageResponse {
    let mut session = state.session.lock().await;
    let status = match session.toggle(RowId(row)) {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            warn!("toggle rejected: {}", e);
            StatusCode::NOT_FOUND
        }
    };
    (status, Html(page(&session)))
}
