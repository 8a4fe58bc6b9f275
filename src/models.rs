use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog record. Field names mirror the `productos.productos` columns;
/// they are also the JSON names on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Producto {
    pub id: Uuid,
    pub nombre: String,
    pub sku: String,
    pub precio: i32,
    pub stock: i32,
    pub activo: bool,
}

/// A validated, ready-to-persist create input. Only the service can turn
/// this into a `Producto` (it owns id generation).
#[derive(Debug, Clone)]
pub struct NewProducto {
    pub nombre: String,
    pub sku: String,
    pub precio: i32,
    pub stock: i32,
    pub activo: bool,
}

/// Validated partial-update fields. `None` means "leave as stored".
#[derive(Debug, Clone, Default)]
pub struct ProductoChanges {
    pub nombre: Option<String>,
    pub sku: Option<String>,
    pub precio: Option<i32>,
    pub stock: Option<i32>,
    pub activo: Option<bool>,
}

/// Raw create body as decoded from the request.
#[derive(Debug, Deserialize)]
pub struct CreateProductoRequest {
    pub nombre: String,
    pub sku: String,
    pub precio: i32,
    pub stock: i32,
    pub activo: bool,
}

impl CreateProductoRequest {
    /// Explicit validation pass producing a typed, already-checked value.
    pub fn validate(self) -> Result<NewProducto, String> {
        validate_nombre(&self.nombre)?;
        validate_sku(&self.sku)?;
        validate_precio(self.precio)?;
        validate_stock(self.stock)?;

        Ok(NewProducto {
            nombre: self.nombre,
            sku: self.sku,
            precio: self.precio,
            stock: self.stock,
            activo: self.activo,
        })
    }
}

/// Raw partial-update body; every field optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProductoRequest {
    pub nombre: Option<String>,
    pub sku: Option<String>,
    pub precio: Option<i32>,
    pub stock: Option<i32>,
    pub activo: Option<bool>,
}

impl UpdateProductoRequest {
    pub fn validate(self) -> Result<ProductoChanges, String> {
        if let Some(nombre) = &self.nombre {
            validate_nombre(nombre)?;
        }
        if let Some(sku) = &self.sku {
            validate_sku(sku)?;
        }
        if let Some(precio) = self.precio {
            validate_precio(precio)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }

        Ok(ProductoChanges {
            nombre: self.nombre,
            sku: self.sku,
            precio: self.precio,
            stock: self.stock,
            activo: self.activo,
        })
    }
}

fn validate_nombre(nombre: &str) -> Result<(), String> {
    let len = nombre.chars().count();
    if len == 0 || len > 50 {
        return Err("nombre debe tener entre 1 y 50 caracteres".to_string());
    }
    Ok(())
}

fn validate_sku(sku: &str) -> Result<(), String> {
    let len = sku.chars().count();
    if len == 0 || len > 30 {
        return Err("sku debe tener entre 1 y 30 caracteres".to_string());
    }
    Ok(())
}

fn validate_precio(precio: i32) -> Result<(), String> {
    if precio <= 0 {
        return Err("precio debe ser un entero positivo".to_string());
    }
    Ok(())
}

fn validate_stock(stock: i32) -> Result<(), String> {
    if stock < 0 {
        return Err("stock no puede ser negativo".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProductoRequest {
        CreateProductoRequest {
            nombre: "Widget".to_string(),
            sku: "SKU-1".to_string(),
            precio: 100,
            stock: 5,
            activo: true,
        }
    }

    #[test]
    fn accepts_valid_create_input() {
        let nuevo = valid_request().validate().unwrap();
        assert_eq!(nuevo.nombre, "Widget");
        assert_eq!(nuevo.sku, "SKU-1");
    }

    #[test]
    fn rejects_empty_nombre() {
        let mut req = valid_request();
        req.nombre = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_overlong_sku() {
        let mut req = valid_request();
        req.sku = "X".repeat(31);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_precio() {
        let mut req = valid_request();
        req.precio = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_negative_stock() {
        let mut req = valid_request();
        req.stock = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_validates_only_present_fields() {
        let req = UpdateProductoRequest {
            nombre: None,
            sku: None,
            precio: Some(250),
            stock: None,
            activo: Some(false),
        };
        let changes = req.validate().unwrap();
        assert_eq!(changes.precio, Some(250));
        assert_eq!(changes.activo, Some(false));
        assert!(changes.nombre.is_none());
    }
}
