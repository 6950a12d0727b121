use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use leave_tracker_backend::config::AppConfig;
use leave_tracker_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config.server.cors_origin)?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!("Leave tracker listening on {}", config.server.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
