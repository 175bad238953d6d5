// src/handlers/session.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::session::{AssessmentSession, CreateSessionResponse},
    state::AppState,
    store::SessionStore,
};

/// Payload for answering the question currently shown.
#[derive(Debug, Deserialize, Validate)]
pub struct AnswerRequest {
    /// 0-based index into the current question's options. The coarse cap
    /// here is the five-point scale ceiling; the exact per-question bound
    /// is enforced against the session.
    #[validate(range(max = 4))]
    pub option_index: usize,
}

/// Starts a new assessment at the first question.
///
/// Returns 201 with the session id and the rendered first view. The id is
/// the client's only handle on the session; losing it orphans the session
/// until the idle sweep collects it.
pub async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session = AssessmentSession::new();
    let view = session.view(&state.bank);
    let session_id = state.sessions.insert(session);

    tracing::info!("Session {} started", session_id);

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse { session_id, view }),
    ))
}

/// Renders the current state without mutating it: the question card while
/// answering, the results once complete.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state
        .sessions
        .with_session(id, |session| Ok(session.view(&state.bank)))?;
    Ok(Json(view))
}

/// Records the answer for the current question and re-renders.
///
/// * Overwrites any earlier answer to the same question; only the latest
///   choice contributes to the scores.
/// * 400 if the index does not address one of the question's options.
/// * 409 once the assessment is complete.
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let view = state.sessions.with_session(id, |session| {
        session.select_option(&state.bank, payload.option_index)?;
        Ok(session.view(&state.bank))
    })?;
    Ok(Json(view))
}

/// Moves forward: to the next question, or into the results state from the
/// last one. Re-renders either way.
pub async fn go_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.sessions.with_session(id, |session| {
        session.go_next(&state.bank);
        Ok(session.view(&state.bank))
    })?;
    Ok(Json(view))
}

/// Moves back one question; a no-op at the start and on the results screen.
pub async fn go_previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.sessions.with_session(id, |session| {
        session.go_previous(&state.bank);
        Ok(session.view(&state.bank))
    })?;
    Ok(Json(view))
}

/// "Start a new test": back to the first question with answers cleared and
/// scores implicitly zeroed. Works from any state, including results.
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.sessions.with_session(id, |session| {
        session.reset();
        Ok(session.view(&state.bank))
    })?;

    tracing::info!("Session {} reset", id);
    Ok(Json(view))
}

/// Ends the session and frees its slot in the store.
pub async fn delete_session(
    State(sessions): State<SessionStore>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    sessions.remove(id)?;
    tracing::info!("Session {} discarded", id);
    Ok(Json(serde_json::json!({
        "message": "Session discarded"
    })))
}
