mod api;
mod catfact;
mod config;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catfact::CatFactClient;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    setup_tracing();

    // Загружаем конфигурацию из окружения
    let config = Config::from_env();

    // Создаём состояние приложения
    let state = Arc::new(api::AppState {
        cat_facts: CatFactClient::new(),
    });

    // Создание router
    let app = api::create_router(state);

    // Настройка адреса для прослушивания
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Server is running on port {}", config.port);
    tracing::info!("Access the API at: http://localhost:{}/me", config.port);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /me      - User profile with a cat fact");
    tracing::info!("  - GET /health  - Health check");

    // Запуск сервера с graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
    tracing::info!("HTTP server shutting down");
}

fn setup_tracing() {
    // Используем EnvFilter::from_default_env() для правильной обработки RUST_LOG
    // Если RUST_LOG не установлена, используем "info" по умолчанию
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
