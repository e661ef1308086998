use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_search_api::{
    catalog::FileCatalog, config::AppConfig, server::Server, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_search_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let catalog = FileCatalog::new(config.catalog_path.clone());
    // The catalog is read per request, so a missing file only fails searches.
    if !catalog.path().exists() {
        tracing::warn!(
            path = %catalog.path().display(),
            "catalog file not found; searches will fail until it exists"
        );
    }

    let state = AppState::new(catalog);
    let server = Server::bind(&config, state).await?;
    tracing::info!("Server running at http://{}", server.local_addr()?);

    server.serve().await
}
