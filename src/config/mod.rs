use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallConfig,
    pub stats: StatsConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Геометрия зала. Фиксируется при старте и не меняется до конца процесса.
#[derive(Debug, Clone, Deserialize)]
pub struct HallConfig {
    pub rows: i32,
    pub columns: i32,
}

// Доступ к статистике продаж
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    pub password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_room=debug,tower_http=debug".to_string()),
            },
            hall: HallConfig {
                rows: env::var("HALL_ROWS")
                    .unwrap_or_else(|_| "9".to_string())
                    .parse()
                    .expect("HALL_ROWS must be a valid number"),
                columns: env::var("HALL_COLUMNS")
                    .unwrap_or_else(|_| "9".to_string())
                    .parse()
                    .expect("HALL_COLUMNS must be a valid number"),
            },
            stats: StatsConfig {
                password: env::var("STATS_PASSWORD")
                    .unwrap_or_else(|_| "super_secret".to_string()),
            },
        }
    }
}
