// ============================================================================
// Axum Extractors
// ============================================================================
//
// GateClaims: extracts and verifies the bearer token from the Authorization
// header before any catalog handler runs. A missing header and an invalid or
// expired token are both rejected as client errors (400), with distinct
// messages.
//
// ============================================================================

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;

use crate::auth::Claims;
use crate::context::AppContext;
use crate::error::AppError;

/// Verified claims of the caller's bearer token.
#[derive(Debug, Clone)]
pub struct GateClaims(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<AppContext>> for GateClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Auth("Falta token".to_string()))?;

        // Tolerate a bare token without the "Bearer " prefix
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let claims = state.auth_manager.verify_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Bearer token rejected");
            AppError::Auth("Token inválido o expirado".to_string())
        })?;

        Ok(GateClaims(claims))
    }
}
