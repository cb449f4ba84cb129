use std::net::SocketAddr;
use std::path::Path;
use tracing::{info, warn, error};

use directory_api::{build_router, AppState};
use directory_infrastructure::{seed_employees, Store};
use directory_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env is read here too)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard keeps the file writer alive
    let _log_guard = directory_shared::telemetry::init_telemetry(&config.log)?;

    info!("Employee directory starting ({})...", config.app.env);

    // Connect the record store
    let store = match Store::connect(&config.database).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to initialise record store: {}", e);
            std::process::exit(1);
        }
    };

    // Seed
    if config.seed.enabled {
        if config.is_production() {
            warn!("Seeding is enabled in production");
        }
        let inserted = seed_employees(&store, Path::new(&config.seed.path)).await?;
        info!("Seed complete: {} employee(s) inserted", inserted);
    }

    // Build router
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    let app = build_router(AppState::new(store, config));

    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Employee directory stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
