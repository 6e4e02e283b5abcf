//! HTTP request handlers for the mock server.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::state::MockState;

/// Query parameters for the record endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RecordQuery {
    pub id: Option<String>,
}

/// GET /?id={id}
pub async fn get_record(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<RecordQuery>,
) -> Response {
    let delay = {
        let mut state = state.write().await;
        state.hits += 1;
        state.delay
    };

    let id = match query.id {
        Some(id) if !id.is_empty() => id,
        _ => return empty_object(StatusCode::BAD_REQUEST),
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let state = state.read().await;

    if let Some(canned) = state.get_canned(&id) {
        let status =
            StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            canned.body.clone(),
        )
            .into_response();
    }

    match state.get_record(&id) {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => empty_object(StatusCode::NOT_FOUND),
    }
}

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

fn empty_object(status: StatusCode) -> Response {
    (status, Json(serde_json::json!({}))).into_response()
}
