//! Liveness check that round-trips a statement to Neo4j.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::{error::HttpError, state::AppState};

/// `GET /health`: 200 when the graph database answers, 503 otherwise.
pub async fn check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<serde_json::Value>), HttpError> {
    state
        .directory
        .ping()
        .await
        .map_err(|e| HttpError::Unavailable(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "staffgraph-api",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    ))
}
