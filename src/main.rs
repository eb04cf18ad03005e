//! Wanderplan trip-planning service
//!
//! Main application entry point

use tracing::info;

use wanderplan::{
    api::{self, AppState},
    config::Settings,
    database::{connection, DatabaseService},
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer flushing
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting Wanderplan service...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = connection::DatabaseConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        ..Default::default()
    };
    let db_pool = connection::create_pool(&db_config).await?;

    // Run database migrations
    connection::run_migrations(&db_pool).await?;

    // Wire services
    let database_service = DatabaseService::new(db_pool);
    let services = ServiceFactory::new(database_service.clone(), settings.clone());
    let state = AppState::new(services, database_service);

    // Build the router and serve
    let app = api::router(state);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Wanderplan listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
