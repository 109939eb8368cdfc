//! HTTP route handlers

pub mod bill;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Liveness probe, reporting the configured print command
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "print_command": state.config.print_command,
    }))
}
