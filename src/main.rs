use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_room::{config::Config, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cinema Room API ({})", config.app.environment);

    // Зал создается один раз и живет до конца процесса
    let state = AppState::new(config.clone());
    info!(
        "Theater hall initialized: {} rows x {} columns",
        config.hall.rows, config.hall.columns
    );

    let app = cinema_room::app(state);

    let listener = tokio::net::TcpListener::bind((config.app.host.as_str(), config.app.port))
        .await
        .unwrap();
    info!("Server listening on {}:{}", config.app.host, config.app.port);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
