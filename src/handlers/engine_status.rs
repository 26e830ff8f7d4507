//! Engine status handler

use axum::{extract::State, Json};

use crate::engine::EngineStatus;
use crate::AppState;

pub async fn status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.engine.status())
}
