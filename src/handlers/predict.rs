//! Prediction handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::models::{PredictRequest, PredictResponse};
use crate::{AppError, AppResult, AppState};

/// Classify one piece of news text.
///
/// Blank input is rejected here, before the engine is invoked; the response
/// carries a `warning` body the UI renders as a non-fatal banner.
pub async fn detect(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    if req.text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let verdict = state.engine.classify(&req.text);

    tracing::debug!(
        label = %verdict.label,
        confidence = verdict.confidence,
        inference_time_us = verdict.inference_time_us,
        "prediction served"
    );

    Ok(Json(PredictResponse::from(verdict)))
}
