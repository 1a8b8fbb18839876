use anyhow::{Context, Result};
use cafe::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::utils::init_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger(
        "cafe",
        config.is_dev,
        config.enable_file_log,
        &config.log_dir,
    );

    let state = AppState::new(&config).await;

    info!(static_dir = %config.static_dir.display(), "☕ Kopi Asik starting");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
