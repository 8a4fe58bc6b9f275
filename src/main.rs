use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use producto_catalog::auth::AuthManager;
use producto_catalog::config::Config;
use producto_catalog::context::AppContext;
use producto_catalog::repository::PgProductRepository;
use producto_catalog::routes::create_router;
use producto_catalog::service::ProductCatalogService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    let config = Arc::new(config);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("=== Producto Catalog Service Starting ===");
    info!("Port: {}", config.port);

    // Initialize database
    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Migrations applied");

    // Explicit construction of the collaborators: gate, repository, service
    let auth_manager = Arc::new(AuthManager::new(&config));
    let repository = Arc::new(PgProductRepository::new(pool));
    let service = ProductCatalogService::new(repository);

    let app_context = Arc::new(AppContext::new(service, auth_manager, config.clone()));
    let router = create_router(app_context);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
