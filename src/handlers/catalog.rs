// src/handlers/catalog.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::{
        dimension::{Dimension, DimensionInfo},
        question::{PublicQuestion, QuestionBank},
    },
};

/// Lists the full question set in presentation order.
/// Weight maps stay server-side; clients only see text and options.
pub async fn list_questions(
    State(bank): State<Arc<QuestionBank>>,
) -> Result<impl IntoResponse, AppError> {
    let questions: Vec<PublicQuestion> = bank.iter().map(PublicQuestion::from).collect();
    Ok(Json(questions))
}

/// Lists the six scored dimensions with their display names.
pub async fn list_dimensions() -> Result<impl IntoResponse, AppError> {
    let dimensions: Vec<DimensionInfo> =
        Dimension::ALL.into_iter().map(DimensionInfo::from).collect();
    Ok(Json(dimensions))
}
