//! Study Timer - a study-session countdown service
//!
//! This is the main entry point for the study-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use study_timer::{
    api::create_router,
    config::Config,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("study_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting study-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, session={}min, record threshold={}s",
        config.host, config.port, config.session_minutes, config.record_threshold_secs
    );

    // Create application state; the session lives as long as the server
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.session_length_seconds(),
        config.record_threshold_secs,
    ));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer             - Current session");
    info!("  PUT  /timer/subject     - Select subject");
    info!("  POST /timer/start       - Start or resume");
    info!("  POST /timer/pause       - Pause");
    info!("  POST /timer/reset       - Reset");
    info!("  POST /timer/stop        - Stop and record");
    info!("  GET  /notifications     - Recent notifications");
    info!("  GET  /dashboard         - Dashboard figures");
    info!("  GET  /subjects          - Subject manager");
    info!("  GET  /groups            - Study groups");
    info!("  GET  /status            - Server status");
    info!("  GET  /health            - Health check");

    // Setup graceful shutdown
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

    state.shutdown();
    info!("Server shutdown complete");
    Ok(())
}
