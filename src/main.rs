//! zte-tracker daemon
//!
//! Scans a ZTE router on an interval and logs device arrivals and departures.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zte_tracker::{get_scanner, Config, TrackerSyncer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zte_tracker=info".into()),
        )
        .init();

    tracing::info!("Starting zte-tracker...");

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Configuration loaded (router: {})", config.scanner.host);

    let scanner = get_scanner(&config).await?;
    if scanner.success_init() {
        tracing::info!(
            "Router {} reachable, {} devices connected",
            scanner.host(),
            scanner.last_results().len()
        );
    }

    let mut syncer = TrackerSyncer::new(config.poll_interval());
    syncer.add_scanner(config.scanner.host.clone(), Box::new(scanner));
    syncer.start().await;

    Ok(())
}
