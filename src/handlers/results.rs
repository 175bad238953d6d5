// src/handlers/results.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// Returns the completed assessment's report: per-dimension scores,
/// normalized percentages, recommendations, and the radar-chart payload.
///
/// 409 while questions remain; completion happens by navigating past the
/// last question.
pub async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let report = state
        .sessions
        .with_session(id, |session| session.results(&state.bank))?;
    Ok(Json(report))
}
