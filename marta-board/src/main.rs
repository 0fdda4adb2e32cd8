use std::net::SocketAddr;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use marta_board::cache::{CacheConfig, CachedMartaClient};
use marta_board::directory::StationDirectory;
use marta_board::marta::{MartaClient, MartaConfig};
use marta_board::web::{AppState, create_router};

/// How often to refresh station listings (1 hour). Listings barely ever
/// change, but an hourly cadence also heals a failed startup fetch.
const STATION_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional feed override, mainly for local development
    let mut marta_config = MartaConfig::default();
    if let Ok(base_url) = std::env::var("MARTA_API_BASE") {
        marta_config = marta_config.with_base_url(base_url);
    }

    let marta_client = MartaClient::new(marta_config).expect("Failed to create MARTA client");

    // Create cached client for arrivals
    let cache_config = CacheConfig::default();
    let cached_marta = CachedMartaClient::new(marta_client.clone(), &cache_config);

    // Fetch station listings; a failed line stays empty until the next
    // refresh, the board itself does not depend on it
    println!("Fetching station listings...");
    let directory = StationDirectory::fetch(marta_client).await;
    println!("Loaded listings for {} lines", directory.len().await);

    // Spawn background task to refresh station listings
    let directory_refresh = directory.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATION_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            let refreshed = directory_refresh.refresh().await;
            info!(lines = refreshed, "refreshed station listings");
        }
    });

    // Build app state
    let state = AppState::new(cached_marta, directory);

    // Create router
    let app = create_router(state, "marta-board/static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("MARTA arrivals board listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("Endpoints:");
    println!("  GET /health       - Health check");
    println!("  GET /about        - About page");
    println!("  GET /lines/:line  - Arrivals board (blue, gold, red, green)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
