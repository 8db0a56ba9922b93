use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use coffee_recipes::modules::recipes::adapters::outbound::sqlite::SqliteRecipeStore;
use coffee_recipes::shared::infrastructure::config::{Config, LogFormat};
use coffee_recipes::shell::http::router;
use coffee_recipes::shell::state::AppState;

fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_logging(&config);

    let store = SqliteRecipeStore::new(&config.database).await?;
    let app = router(AppState::new(Arc::new(store)));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "recipe API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
