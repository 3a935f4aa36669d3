use std::sync::Arc;

use tillpoint_api::config::ApiConfig;
use tillpoint_users::InMemoryUserDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tillpoint_observability::init();

    // Fatal when the signing secret is absent. There is no dev fallback.
    let config = ApiConfig::from_env()?;

    // TODO: swap for the database-backed directory once the user-management
    // service exposes its lookup API.
    let directory = Arc::new(InMemoryUserDirectory::demo());

    let app = tillpoint_api::app::build_app(&config, directory);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
