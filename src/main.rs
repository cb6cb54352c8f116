use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use jotter::config::ServerConfig;
use jotter::todos::routes::todo_routes;
use jotter::todos::store::TodoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let ServerConfig { port, data_file } = ServerConfig::from_env();

    eprintln!("📝 Jotter v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{}/todos", port);
    eprintln!("   Data: {}\n", data_file.display());

    let store = Arc::new(TodoStore::load(data_file).await);

    // The web client is served from a different origin.
    let app = todo_routes(store).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!(port, "HTTP server started");
    axum::serve(listener, app).await?;

    Ok(())
}
