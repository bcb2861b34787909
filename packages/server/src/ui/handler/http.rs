//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use hiroba_shared::time::timestamp_to_rfc3339;

use crate::{infrastructure::dto::http::ConnectionDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint listing the current registry membership
pub async fn get_connections(State(state): State<Arc<AppState>>) -> Json<Vec<ConnectionDto>> {
    let connections = state.registry.connections().await;

    let mut dtos: Vec<ConnectionDto> = connections
        .iter()
        .map(|conn| ConnectionDto {
            connection_id: conn.id.as_str().to_string(),
            connected_at: timestamp_to_rfc3339(conn.connected_at.value()),
        })
        .collect();

    // Sort by connection_id for consistent ordering
    dtos.sort_by(|a, b| a.connection_id.cmp(&b.connection_id));

    Json(dtos)
}
