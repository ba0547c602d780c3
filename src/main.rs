use covers_cli::config::AppConfig;
use covers_cli::errors::{AppError, AppResult};
use covers_cli::models::CoverDate;
use covers_cli::{fetcher, publisher, utils};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let rt = tokio::runtime::Runtime::new().map_err(|e| AppError::IoError(e.to_string()))?;
    rt.block_on(run())
}

async fn run() -> AppResult<()> {
    let config = AppConfig::load()?;
    let date = CoverDate::today();
    info!(blob = %date.blob_name(), "Archiving today's front page");

    let client = reqwest::Client::new();
    let started = Instant::now();
    let page = fetcher::fetch_cover(&client, &config.resolved, date).await?;
    info!(
        size = %utils::display_size(page.len() as u64),
        elapsed = %utils::format_duration(started.elapsed()),
        "Front page downloaded"
    );

    let container = publisher::authenticate(&config).await?;
    publisher::upload_cover(&container, &date.blob_name(), page).await?;
    Ok(())
}
