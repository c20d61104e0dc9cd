use anyhow::Result;
use seethio_api::{build_app, ApiConfig};
use seethio_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("seethio_api");

    let config = ApiConfig::from_env()?;
    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(
        bind = %config.bind,
        catalog = ?config.catalog_path,
        "seethio itinerary api started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
