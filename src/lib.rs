pub mod config;
pub mod controllers;
pub mod inventory;
pub mod models;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::inventory::TheaterInventory;

// Shared state для всего приложения
pub struct AppState {
    pub inventory: TheaterInventory,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let inventory = TheaterInventory::new(config.hall.rows, config.hall.columns);
        Arc::new(Self { inventory, config })
    }
}

// Полный роутер приложения. Интеграционные тесты поднимают его же,
// чтобы ходить по тем же ручкам, что и продакшен.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Cinema Room API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
