#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    match &config.backend_url {
        Some(url) => tracing::info!(backend = %url, "forwarding /api to records backend"),
        None => tracing::warn!("SEARCH_BACKEND_URL not set; /api requests will fail with 502"),
    }

    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "record-search listening");
    axum::serve(listener, app).await.expect("server failed");
}
