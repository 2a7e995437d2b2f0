use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::models::Seat;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/seats", get(list_seats))
}

// GET /seats
#[derive(Debug, Serialize)]
struct SeatMapResponse {
    total_rows: i32,
    total_columns: i32,
    available_seats: Vec<Seat>,
}

async fn list_seats(State(state): State<Arc<AppState>>) -> Json<SeatMapResponse> {
    let map = state.inventory.list_seats();
    Json(SeatMapResponse {
        total_rows: map.rows,
        total_columns: map.columns,
        available_seats: map.available,
    })
}
