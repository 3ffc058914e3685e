use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

use veritrust_backend::{api, config, ImageGenClient, Store};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config.log_startup();

    // One store handle for the process lifetime; released after the server
    // future resolves.
    let store = Store::connect(&config.mongo_url, &config.db_name)
        .await
        .expect("Failed to connect to MongoDB");

    let image_client = config
        .emergent_llm_key
        .clone()
        .map(|key| ImageGenClient::new(config.image_api_url.clone(), key));
    if image_client.is_none() {
        tracing::warn!("EMERGENT_LLM_KEY not set; image generation requests will fail");
    }

    let state = Arc::new(api::routes::AppState {
        store: store.clone(),
        image_client,
    });

    // Build our application with all routes under the /api prefix
    let app = Router::new()
        .nest("/api", api::routes::api_router(state))
        .layer(api::routes::cors_layer(&config.cors_origins));

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 0.0.0.0", host_str);
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8001", port_str);
        8001
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);

    let server = axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    if let Err(e) = server.await {
        tracing::error!("server error: {}", e);
    }

    store.shutdown().await;
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("shutdown signal received");
}
