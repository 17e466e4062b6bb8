//! Ring Countdown - a circular countdown timer served over HTTP
//!
//! This is the main entry point for the ring-countdown application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use ring_countdown::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::state_logger_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("ring_countdown={},tower_http=info", config.log_level()))
        .init();

    info!("Starting ring-countdown server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, total={}s",
          config.host, config.port, config.total);

    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.total));

    tokio::spawn(state_logger_task(state.controller.subscribe()));

    if config.autostart {
        state.controller.start(config.total, true)?;
    }

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start or resume the countdown");
    info!("  POST /pause  - Pause the countdown");
    info!("  POST /stop   - Stop the countdown");
    info!("  POST /play   - Press the play/pause button");
    info!("  GET  /status - Current state and rendered view");
    info!("  GET  /events - Stream state changes (SSE)");
    info!("  GET  /health - Health check");

    // Event streams never end on their own, so shutdown does not wait for them
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.controller.stop();
    info!("Server shutdown complete");
    Ok(())
}
