// src/main.rs
use trader_dashboard::application::usecase::{DashboardAggregator, DashboardUseCase};
use trader_dashboard::config::Config;
use trader_dashboard::domain::errors::AppResult;
use trader_dashboard::domain::repository::SnapshotSource;
use trader_dashboard::infrastructure::snapshot::JsonFileSnapshotSource;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let mut config = Config::from_env()?;

    // A path on the command line wins over SNAPSHOT_PATH
    if let Some(path) = std::env::args().nth(1) {
        config.snapshot.path = path;
    }

    config.init_logging()?;

    log::info!("Starting trader_dashboard v{}", env!("CARGO_PKG_VERSION"));

    let aggregator = DashboardAggregator::new(config.dashboard.settings());
    log::info!(
        "Preview limit {}, numeric policy {:?}",
        aggregator.settings().preview_limit,
        aggregator.settings().numeric_policy
    );

    let source = JsonFileSnapshotSource::new(&config.snapshot.path);
    log::info!("Reading snapshot from {}", source.path().display());
    let snapshot = source.fetch_snapshot().await?;

    let view = aggregator.build_from_snapshot(&snapshot).map_err(|e| {
        log::error!("Failed to build dashboard: {}", e);
        e
    })?;

    if view.attention.needs_attention {
        log::info!(
            "{} item(s) need attention",
            view.attention.badge_count.unwrap_or_default()
        );
    }

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
