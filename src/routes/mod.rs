// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: Main router assembly and middleware layering
// - auth.rs: Credential issuing endpoint
// - productos.rs: Product catalog endpoints
// - health.rs: Health check endpoint
// - extractors.rs: Bearer-gate extractor
// - middleware.rs: Request logging
//
// ============================================================================

mod auth;
mod extractors;
mod health;
mod middleware;
mod productos;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Create the main application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    Router::new()
        // Health (no gate)
        .route("/health", get(health::health_check))
        // Credential issuing (no gate)
        .route("/auth/login", post(auth::login))
        // Catalog operations (gated)
        .route("/productos", post(productos::create).get(productos::list))
        .route("/productos/seed", post(productos::seed))
        .route(
            "/productos/:id",
            get(productos::get_one)
                .patch(productos::update)
                .delete(productos::remove),
        )
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .into_inner(),
        )
        .with_state(app_context)
}
