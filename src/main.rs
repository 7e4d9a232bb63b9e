use item_server::{AppState, Config, create_router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,item_server=debug")),
        )
        .with_target(true)
        .init();

    if let Err(err) = run().await {
        error!("Server startup failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), item_server::core::StartupError> {
    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.log_summary();

    let state = Arc::new(AppState::connect(&config).await?);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
