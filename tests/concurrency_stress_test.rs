//! Concurrency stress tests for the shared seat inventory.
//!
//! Проверяем линеаризуемость покупок и возвратов через настоящие HTTP-запросы:
//! при любом числе конкурентов место продается ровно один раз, токен
//! гасится ровно один раз, разбиение зала остается полным.
//!
//! Run with: `cargo test --test concurrency_stress_test`

use cinema_room::config::{AppConfig, Config, HallConfig, StatsConfig};
use cinema_room::AppState;
use serde_json::{json, Value};

const TEST_PASSWORD: &str = "super_secret_9x9";

async fn spawn_app() -> String {
    let config = Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "cinema_room=info".to_string(),
        },
        hall: HallConfig {
            rows: 9,
            columns: 9,
        },
        stats: StatsConfig {
            password: TEST_PASSWORD.to_string(),
        },
    };
    let state = AppState::new(config);
    let app = cinema_room::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("serve test app");
    });
    format!("http://{addr}")
}

async fn fetch_stats(client: &reqwest::Client, base: &str) -> Value {
    client
        .get(format!("{base}/stats"))
        .query(&[("password", TEST_PASSWORD)])
        .send()
        .await
        .expect("send stats")
        .json()
        .await
        .expect("stats json")
}

/// 100 конкурентных покупателей на одно место: ровно один выигрывает,
/// остальные получают "уже продано".
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn hundred_buyers_fight_for_one_seat() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for _ in 0..100 {
        let client = client.clone();
        let url = format!("{base}/purchase");
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({ "row": 5, "column": 5 }))
                .send()
                .await
                .expect("send purchase")
                .status()
                .as_u16()
        }));
    }

    let mut sold = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.expect("join purchase task") {
            200 => sold += 1,
            400 => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(sold, 1);
    assert_eq!(rejected, 99);

    let stats = fetch_stats(&client, &base).await;
    assert_eq!(stats["number_of_purchased_tickets"], 1);
    assert_eq!(stats["number_of_available_seats"], 80);
    assert_eq!(stats["current_income"], 8);
}

/// Штурм всего зала: по три покупателя на каждое место. Каждое место
/// продается ровно один раз, доход сходится с тарифом.
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn storming_the_hall_sells_each_seat_once() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for row in 1..=9 {
        for column in 1..=9 {
            for _ in 0..3 {
                let client = client.clone();
                let url = format!("{base}/purchase");
                handles.push(tokio::spawn(async move {
                    client
                        .post(url)
                        .json(&json!({ "row": row, "column": column }))
                        .send()
                        .await
                        .expect("send purchase")
                        .status()
                        .as_u16()
                }));
            }
        }
    }

    let mut sold = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.expect("join purchase task") {
            200 => sold += 1,
            400 => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(sold, 81);
    assert_eq!(rejected, 81 * 2);

    // 4 ряда по 10 + 5 рядов по 8, по 9 мест в ряду.
    let stats = fetch_stats(&client, &base).await;
    assert_eq!(stats["number_of_purchased_tickets"], 81);
    assert_eq!(stats["number_of_available_seats"], 0);
    assert_eq!(stats["current_income"], 4 * 9 * 10 + 5 * 9 * 8);
}

/// Каждый выданный токен пытаются вернуть два конкурента: возврат
/// проходит ровно один раз, после чего зал снова полон.
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_returns_release_each_token_once() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let mut tokens = Vec::new();
    for column in 1..=9 {
        let body: Value = client
            .post(format!("{base}/purchase"))
            .json(&json!({ "row": 1, "column": column }))
            .send()
            .await
            .expect("send purchase")
            .json()
            .await
            .expect("ticket json");
        tokens.push(body["token"].as_str().expect("token").to_string());
    }

    let mut handles = Vec::new();
    for token in &tokens {
        for _ in 0..2 {
            let client = client.clone();
            let url = format!("{base}/return");
            let token = token.clone();
            handles.push(tokio::spawn(async move {
                client
                    .post(url)
                    .json(&json!({ "token": token }))
                    .send()
                    .await
                    .expect("send return")
                    .status()
                    .as_u16()
            }));
        }
    }

    let mut returned = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.expect("join return task") {
            200 => returned += 1,
            400 => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(returned, tokens.len());
    assert_eq!(rejected, tokens.len());

    let stats = fetch_stats(&client, &base).await;
    assert_eq!(stats["number_of_purchased_tickets"], 0);
    assert_eq!(stats["number_of_available_seats"], 81);
    assert_eq!(stats["current_income"], 0);
}
