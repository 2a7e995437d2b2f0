pub mod seats;
pub mod stats;
pub mod tickets;

use axum::{http::StatusCode, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(tickets::routes())
        .merge(stats::routes())
}

/* ---------- helpers ---------- */

// Единый формат ошибок API: {"error": "..."} с нужным статусом.
pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message.into() })))
}
