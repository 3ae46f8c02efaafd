use anyhow::Context;
use local_library::config::Config;
use local_library::controller::CatalogController;
use local_library::http::{self, AppState, JsonRenderer};
use local_library::lifecycle::{seed, setup_tracing, LibrarySystem};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::from_env().context("invalid configuration")?;
    info!(addr = %config.addr, capacity = config.channel_capacity, "Starting local library");

    let system = LibrarySystem::new(config.channel_capacity);

    if config.seed {
        let span = tracing::info_span!("seed");
        seed::populate(&system.catalog)
            .instrument(span)
            .await
            .context("failed to insert sample library")?;
    }

    let state = AppState::new(CatalogController::new(system.catalog.clone()), JsonRenderer);
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("HTTP server listening on {}", config.addr);
    info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Ctrl+C received");
        })
        .await
        .context("server error")?;

    system.shutdown().await?;
    info!("Application stopped");
    Ok(())
}
