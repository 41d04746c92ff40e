use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use webinars::{
    MIGRATOR, config::AppConfig, repositories::PgWebinarRepository, routes, state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting webinars service");

    let config = AppConfig::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    run_migrations(&pool, &MIGRATOR).await?;

    let webinar_repository = Arc::new(PgWebinarRepository::new(pool));
    let app_state = AppState::new(webinar_repository, config.default_user_id);

    info!("Webinars service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Webinars service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
