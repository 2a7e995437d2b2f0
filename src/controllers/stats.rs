//! stats.rs
//!
//! Статистика продаж за общим секретом.
//!
//! Проверка пароля — забота этого слоя: ядро отдает `stats()` безусловно,
//! решает, звать ли его, только обработчик. Неверный или отсутствующий
//! пароль — 401 с тем же форматом ошибки, что и у остальных ручек.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::controllers::error_response;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}

// GET /stats?password=...
#[derive(Debug, Deserialize)]
struct StatsQuery {
    password: Option<String>,
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    if params.password.as_deref() != Some(state.config.stats.password.as_str()) {
        debug!("Отказ в статистике: неверный пароль");
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "The password is wrong!",
        ));
    }

    Ok((StatusCode::OK, Json(state.inventory.stats())))
}
