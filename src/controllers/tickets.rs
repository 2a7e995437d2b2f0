//! tickets.rs
//!
//! Покупка и возврат билетов.
//!
//! Оба обработчика — тонкие адаптеры над `TheaterInventory`: распаковать
//! запрос, вызвать операцию ядра, отобразить результат или ошибку в
//! формат `{"error": "..."}` со статусом 400.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::controllers::error_response;
use crate::models::Seat;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/purchase", post(purchase_ticket))
        .route("/return", post(return_ticket))
}

// POST /purchase
#[derive(Debug, Deserialize)]
struct PurchaseRequest {
    row: i32,
    column: i32,
}

async fn purchase_ticket(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PurchaseRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let ticket = state.inventory.purchase(req.row, req.column).map_err(|e| {
        debug!("Отказ в покупке ({}, {}): {}", req.row, req.column, e);
        error_response(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    info!(
        "Продано место ({}, {}) за {}",
        ticket.seat.row, ticket.seat.column, ticket.seat.price
    );
    Ok((StatusCode::OK, Json(ticket)))
}

// POST /return
#[derive(Debug, Deserialize)]
struct ReturnRequest {
    token: String,
}

#[derive(Debug, Serialize)]
struct ReturnResponse {
    returned_ticket: Seat,
}

async fn return_ticket(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let token = extract_token(&body);
    let seat = state.inventory.return_ticket(&token).map_err(|e| {
        debug!("Отказ в возврате: {}", e);
        error_response(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    info!("Возврат места ({}, {})", seat.row, seat.column);
    Ok((StatusCode::OK, Json(ReturnResponse { returned_ticket: seat })))
}

/// Токен принимаем и в конверте `{"token": "..."}`, и голой строкой в теле.
/// Ядро в любом случае получает чистую строку токена; тело, из которого
/// известный токен не извлекается, закончится ошибкой "Wrong token!".
fn extract_token(body: &str) -> String {
    if let Ok(req) = serde_json::from_str::<ReturnRequest>(body) {
        return req.token;
    }
    body.trim().trim_matches('"').to_string()
}
