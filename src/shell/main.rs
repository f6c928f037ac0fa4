use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use mergington_activities::modules::activities::adapters::outbound::registry_in_memory::InMemoryRegistryStore;
use mergington_activities::modules::activities::core::state::RegistryState;
use mergington_activities::shell::config::AppConfig;
use mergington_activities::shell::http::router;
use mergington_activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().context("invalid configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    fmt().with_env_filter(filter).init();

    let seeds = config.load_seed().context("cannot load activity seed")?;
    let registry = RegistryState::seeded(seeds).context("activity seed is inconsistent")?;
    tracing::info!(activities = registry.len(), "registry seeded");

    let store = Arc::new(InMemoryRegistryStore::seeded(registry));
    let state = AppState::in_memory(store);
    let app = router(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!("Activities API: http://{}/activities", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
