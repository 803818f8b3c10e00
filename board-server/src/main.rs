use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use board_server::cache::{CacheConfig, CachedVbbClient};
use board_server::config::AppConfig;
use board_server::vbb::{VbbClient, VbbConfig};
use board_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_path =
        PathBuf::from(std::env::var("BOARD_CONFIG").unwrap_or_else(|_| "config.json".to_string()));
    let config = AppConfig::load(&config_path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {e}", config_path.display()));

    // Create VBB client with caching
    let vbb_client = VbbClient::new(VbbConfig::new()).expect("Failed to create VBB client");
    let cached_vbb = CachedVbbClient::new(vbb_client, &CacheConfig::default());

    let port = config.port;
    let state = AppState::new(cached_vbb, config).expect("Invalid quadrant configuration");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Departure board listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health           - Health check");
    println!("  GET /api/stations     - Nearby stations with departures");
    println!("  GET /api/display.png  - E-ink display image");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
