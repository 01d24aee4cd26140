use mars_gateway::config::AppConfig;
use mars_gateway::handlers::AppState;
use mars_gateway::routes::build_router;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Wire clients, services and shared state
    let state = AppState::from_config(&config)?;

    // Background task: evict expired rate-limit windows
    {
        let limiter = state.limiter.clone();
        let interval = limiter.window();
        tokio::spawn(async move {
            info!("Starting rate-limit sweep task (interval: {:?})", interval);
            loop {
                tokio::time::sleep(interval).await;
                limiter.sweep().await;
            }
        });
    }

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("mars_gateway service listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
