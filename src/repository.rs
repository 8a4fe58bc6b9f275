use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Producto, ProductoChanges};

/// Storage-level failure, typed so callers never inspect driver text.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint was violated; `constraint` is the name reported
    /// by the database (e.g. `productos_sku_key`).
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return RepositoryError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or_default().to_string(),
                };
            }
        }
        RepositoryError::Database(e)
    }
}

/// Persistence boundary for catalog records.
///
/// `update_active` and `deactivate` are conditional updates scoped by
/// `id AND activo = TRUE`; they return the number of rows affected so the
/// service can distinguish "no eligible record" from success.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, producto: &Producto) -> Result<(), RepositoryError>;

    async fn insert_batch(&self, productos: &[Producto]) -> Result<u64, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Producto>, RepositoryError>;

    /// Page of records ordered by `nombre` ascending. No filtering on
    /// `activo`. Offset is passed through to the store untouched.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Producto>, RepositoryError>;

    /// Total record count, inactive rows included.
    async fn count(&self) -> Result<i64, RepositoryError>;

    async fn update_active(
        &self,
        id: Uuid,
        changes: &ProductoChanges,
    ) -> Result<u64, RepositoryError>;

    async fn deactivate(&self, id: Uuid) -> Result<u64, RepositoryError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Postgres-backed repository over the `productos.productos` table.
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, producto: &Producto) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO productos.productos (id, nombre, sku, precio, stock, activo)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(producto.id)
        .bind(&producto.nombre)
        .bind(&producto.sku)
        .bind(producto.precio)
        .bind(producto.stock)
        .bind(producto.activo)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_batch(&self, productos: &[Producto]) -> Result<u64, RepositoryError> {
        // Single multi-row statement so the batch lands atomically.
        let ids: Vec<Uuid> = productos.iter().map(|p| p.id).collect();
        let nombres: Vec<String> = productos.iter().map(|p| p.nombre.clone()).collect();
        let skus: Vec<String> = productos.iter().map(|p| p.sku.clone()).collect();
        let precios: Vec<i32> = productos.iter().map(|p| p.precio).collect();
        let stocks: Vec<i32> = productos.iter().map(|p| p.stock).collect();
        let activos: Vec<bool> = productos.iter().map(|p| p.activo).collect();

        let result = sqlx::query(
            r#"
            INSERT INTO productos.productos (id, nombre, sku, precio, stock, activo)
            SELECT * FROM UNNEST($1::uuid[], $2::text[], $3::text[], $4::int4[], $5::int4[], $6::bool[])
            "#,
        )
        .bind(&ids)
        .bind(&nombres)
        .bind(&skus)
        .bind(&precios)
        .bind(&stocks)
        .bind(&activos)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Producto>, RepositoryError> {
        let producto = sqlx::query_as::<_, Producto>(
            r#"
            SELECT id, nombre, sku, precio, stock, activo
            FROM productos.productos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(producto)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Producto>, RepositoryError> {
        let productos = sqlx::query_as::<_, Producto>(
            r#"
            SELECT id, nombre, sku, precio, stock, activo
            FROM productos.productos
            ORDER BY nombre ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(productos)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos.productos")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn update_active(
        &self,
        id: Uuid,
        changes: &ProductoChanges,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE productos.productos
            SET nombre = COALESCE($2, nombre),
                sku    = COALESCE($3, sku),
                precio = COALESCE($4, precio),
                stock  = COALESCE($5, stock),
                activo = COALESCE($6, activo)
            WHERE id = $1 AND activo = TRUE
            "#,
        )
        .bind(id)
        .bind(&changes.nombre)
        .bind(&changes.sku)
        .bind(changes.precio)
        .bind(changes.stock)
        .bind(changes.activo)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn deactivate(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE productos.productos
            SET activo = FALSE
            WHERE id = $1 AND activo = TRUE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
