// ============================================================================
// Authentication Routes
// ============================================================================
//
// Endpoints:
// - POST /auth/login - Issue the static catalog credential
//
// ============================================================================

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use std::sync::Arc;

use crate::context::AppContext;
use crate::error::AppError;

/// POST /auth/login
/// Mints a signed, time-limited token for the fixed catalog identity.
/// Takes no credentials; there are no user accounts.
pub async fn login(
    State(app_context): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, AppError> {
    let token = app_context.auth_manager.issue_static_token()?;

    Ok((StatusCode::OK, Json(json!({ "token": token }))))
}
