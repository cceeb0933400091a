//! Check-in Portal
//!
//! Main application entry point

use tracing::{info, warn};

use checkin_portal::{
    config::{Settings, StorageBackend},
    database::{connection, DatabaseService},
    server::{build_app, AppState},
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", checkin_portal::info());

    let database = match settings.storage.backend {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let db_config = connection::DatabaseConfig::from(&settings.database);
            let db_pool = connection::create_pool(&db_config).await?;
            connection::run_migrations(&db_pool).await?;
            DatabaseService::new(db_pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; check-ins will not survive a restart");
            DatabaseService::in_memory()
        }
    };

    let state = AppState::new(database, &settings);
    let app = build_app(state);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Portal has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
