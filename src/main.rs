use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use product_assistant::routes;
use product_assistant::{AppState, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_assistant=debug,tower_http=debug")),
        )
        .init();

    let settings = Settings::from_env()?;
    info!("Project endpoint: {}", settings.project_endpoint());
    info!("Search index: {}", settings.search_index);

    // Provisions a new agent version on every start
    let app_state = AppState::new(settings.clone()).await?;
    let app = routes::build_router(app_state);

    let addr = settings.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
