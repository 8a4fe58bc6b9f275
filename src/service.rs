use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewProducto, Producto, ProductoChanges};
use crate::repository::{ProductRepository, RepositoryError};
use crate::seed;

/// Uniform outcome classification for every catalog operation. Raw
/// repository errors never cross this boundary; each operation reclassifies
/// them and discards diagnostic detail from the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

const MSG_SKU_EXISTS: &str = "El SKU ya existe";
const MSG_DUPLICATE: &str = "Ya existe un valor duplicado único";
const MSG_NOT_FOUND: &str = "Producto no encontrado";
const MSG_CREATE_FAILED: &str = "Error al guardar el producto";
const MSG_GET_FAILED: &str = "Error al obtener producto";
const MSG_LIST_FAILED: &str = "Error al obtener productos";
const MSG_UPDATE_FAILED: &str = "Error al actualizar producto";
const MSG_DELETE_FAILED: &str = "Error al eliminar producto";
const MSG_SEED_FAILED: &str = "Error al generar productos";

/// Owns all catalog business rules: id generation, conflict classification,
/// pagination, soft-delete targeting and synthetic seeding. The repository
/// is injected so the rules can be exercised against any store.
#[derive(Clone)]
pub struct ProductCatalogService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductCatalogService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Persists a validated input under a freshly generated id. Duplicate
    /// detection relies solely on the store's unique constraint.
    pub async fn create(&self, nuevo: NewProducto) -> Result<Producto, ServiceError> {
        let producto = Producto {
            id: Uuid::new_v4(),
            nombre: nuevo.nombre,
            sku: nuevo.sku,
            precio: nuevo.precio,
            stock: nuevo.stock,
            activo: nuevo.activo,
        };

        match self.repo.insert(&producto).await {
            Ok(()) => Ok(producto),
            Err(RepositoryError::UniqueViolation { constraint }) => {
                if constraint.contains("sku") {
                    Err(ServiceError::BadRequest(MSG_SKU_EXISTS.to_string()))
                } else {
                    Err(ServiceError::BadRequest(MSG_DUPLICATE.to_string()))
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist producto");
                Err(ServiceError::Internal(MSG_CREATE_FAILED.to_string()))
            }
        }
    }

    /// Lookup by id only; soft-deleted records are still retrievable.
    pub async fn get_one(&self, id: Uuid) -> Result<Producto, ServiceError> {
        match self.repo.find_by_id(id).await {
            Ok(Some(producto)) => Ok(producto),
            Ok(None) => Err(ServiceError::NotFound(MSG_NOT_FOUND.to_string())),
            Err(e) => {
                tracing::error!(error = %e, producto_id = %id, "Failed to fetch producto");
                Err(ServiceError::Internal(MSG_GET_FAILED.to_string()))
            }
        }
    }

    /// Page ordered by nombre ascending plus the unfiltered total. No
    /// lower-bound validation on page/limit; out-of-range values surface as
    /// whatever the store makes of the resulting offset.
    pub async fn list_page(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Producto>, i64), ServiceError> {
        let offset = (page - 1) * limit;

        let productos = self.repo.find_page(offset, limit).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch producto page");
            ServiceError::Internal(MSG_LIST_FAILED.to_string())
        })?;
        let total = self.repo.count().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to count productos");
            ServiceError::Internal(MSG_LIST_FAILED.to_string())
        })?;

        Ok((productos, total))
    }

    /// Applies partial changes to a record matching `id` that is still
    /// active. Zero affected rows (absent, or present but inactive) is
    /// NotFound.
    pub async fn update(&self, id: Uuid, changes: ProductoChanges) -> Result<(), ServiceError> {
        match self.repo.update_active(id, &changes).await {
            Ok(0) => Err(ServiceError::NotFound(MSG_NOT_FOUND.to_string())),
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, producto_id = %id, "Failed to update producto");
                Err(ServiceError::Internal(MSG_UPDATE_FAILED.to_string()))
            }
        }
    }

    /// Marks an active record inactive. A second call on the same id is
    /// NotFound, not a silent success.
    pub async fn soft_delete(&self, id: Uuid) -> Result<(), ServiceError> {
        match self.repo.deactivate(id).await {
            Ok(0) => Err(ServiceError::NotFound(MSG_NOT_FOUND.to_string())),
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, producto_id = %id, "Failed to soft-delete producto");
                Err(ServiceError::Internal(MSG_DELETE_FAILED.to_string()))
            }
        }
    }

    /// Tops the catalog up to `target` records with synthetic data and
    /// reports how many were created. The count-then-insert window is not
    /// transactional; concurrent seeds can overshoot the target.
    pub async fn seed(&self, target: i64) -> Result<u64, ServiceError> {
        let total = self.repo.count().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to count productos before seeding");
            ServiceError::Internal(MSG_SEED_FAILED.to_string())
        })?;

        let missing = (target - total).max(0);
        if missing == 0 {
            return Ok(0);
        }

        let batch = seed::synthesize_productos(missing);
        match self.repo.insert_batch(&batch).await {
            Ok(created) => Ok(created),
            Err(e) => {
                tracing::error!(error = %e, missing, "Failed to persist seed batch");
                Err(ServiceError::Internal(MSG_SEED_FAILED.to_string()))
            }
        }
    }

    /// Storage connectivity probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.repo
            .ping()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }
}
