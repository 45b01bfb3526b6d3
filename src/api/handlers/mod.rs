use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use super::error::{ApiError, ApiJson};
use super::AppState;
use crate::assistant;
use crate::models::*;

// ============================================================
// Health
// ============================================================

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "PCB Design API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy"
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Designs
// ============================================================

pub async fn list_designs(State(state): State<AppState>) -> Json<Vec<Design>> {
    Json(state.designs.list())
}

pub async fn create_design(
    State(state): State<AppState>,
    ApiJson(design): ApiJson<Design>,
) -> Json<Design> {
    Json(state.designs.create(design))
}

pub async fn get_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Design>, ApiError> {
    Ok(Json(state.designs.get(&id)?))
}

pub async fn update_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(design): ApiJson<Design>,
) -> Result<Json<Design>, ApiError> {
    Ok(Json(state.designs.update(&id, design)?))
}

pub async fn delete_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.designs.delete(&id)?;
    Ok(Json(serde_json::json!({ "message": "Design deleted" })))
}

/// Runs the DRC and stores the issues on the design.
pub async fn validate_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let issues = state.designs.validate(&id)?;
    tracing::info!(design_id = %id, issues = issues.len(), "Design validated");
    Ok(Json(ValidationResponse { issues }))
}

// ============================================================
// Assistant
// ============================================================

pub async fn get_suggestions(
    State(state): State<AppState>,
    ApiJson(design): ApiJson<Design>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: state.assistant.suggest(&design),
    })
}

pub async fn explain_error(ApiJson(payload): ApiJson<ExplainErrorRequest>) -> Json<Explanation> {
    tracing::debug!(context_keys = payload.context.len(), "Explaining error");
    Json(assistant::explain_error(&payload.error))
}

pub async fn next_action(ApiJson(design): ApiJson<Design>) -> Json<NextAction> {
    Json(assistant::next_action(&design))
}
