#![allow(dead_code)]

use std::sync::Arc;

use lego_api::config::ServerConfig;
use lego_api::router::build_app_router;
use lego_api::state::AppState;
use lego_client::ContentLegoClient;

/// Serve the real router over a seeded in-memory database on an ephemeral
/// port and return a client pointed at it.
pub async fn spawn_backend() -> ContentLegoClient {
    let pool = lego_db::create_memory_pool().await.unwrap();
    lego_db::run_migrations(&pool).await.unwrap();
    lego_db::seed::seed_if_empty(&pool).await.unwrap();

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
    };
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator: None,
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ContentLegoClient::with_client(reqwest::Client::new(), &format!("http://{addr}")).unwrap()
}

/// Serve an arbitrary stand-in router on an ephemeral port.
pub async fn spawn_stub(app: axum::Router) -> ContentLegoClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ContentLegoClient::with_client(reqwest::Client::new(), &format!("http://{addr}")).unwrap()
}
