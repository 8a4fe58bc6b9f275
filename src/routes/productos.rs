// ============================================================================
// Product Catalog Routes
// ============================================================================
//
// Endpoints (all gated by GateClaims):
// - POST   /productos          - Create a product
// - GET    /productos/:id      - Fetch one product (inactive included)
// - GET    /productos          - Paginated list ordered by nombre
// - PATCH  /productos/:id      - Partial update of an active product
// - DELETE /productos/:id      - Soft delete
// - POST   /productos/seed     - Top the catalog up with synthetic data
//
// ============================================================================

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::context::AppContext;
use crate::error::AppError;
use crate::models::{CreateProductoRequest, UpdateProductoRequest};
use crate::routes::extractors::GateClaims;

/// The seed endpoint always tops the catalog up to this many records.
const SEED_TARGET: i64 = 100;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /productos
pub async fn create(
    State(app_context): State<Arc<AppContext>>,
    _claims: GateClaims,
    Json(request): Json<CreateProductoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let nuevo = request.validate().map_err(AppError::Validation)?;
    let producto = app_context.service.create(nuevo).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "code": 201,
            "message": "Producto creado correctamente",
            "data": producto,
        })),
    ))
}

/// GET /productos/:id
pub async fn get_one(
    State(app_context): State<Arc<AppContext>>,
    _claims: GateClaims,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let producto = app_context.service.get_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "code": 200,
            "message": "Producto encontrado",
            "data": producto,
        })),
    ))
}

/// GET /productos?page&limit
pub async fn list(
    State(app_context): State<Arc<AppContext>>,
    _claims: GateClaims,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let (productos, total) = app_context.service.list_page(page, limit).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "code": 200,
            "message": "Lista paginada de productos",
            "total": total,
            "data": productos,
        })),
    ))
}

/// PATCH /productos/:id
pub async fn update(
    State(app_context): State<Arc<AppContext>>,
    _claims: GateClaims,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProductoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let changes = request.validate().map_err(AppError::Validation)?;
    app_context.service.update(id, changes).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /productos/:id
pub async fn remove(
    State(app_context): State<Arc<AppContext>>,
    _claims: GateClaims,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_context.service.soft_delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /productos/seed
pub async fn seed(
    State(app_context): State<Arc<AppContext>>,
    _claims: GateClaims,
) -> Result<impl IntoResponse, AppError> {
    let cantidad = app_context.service.seed(SEED_TARGET).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "code": 201,
            "message": "Productos generados correctamente",
            "cantidad": cantidad,
        })),
    ))
}
