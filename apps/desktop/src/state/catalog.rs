//! # Catalog State
//!
//! Products loaded into the app. Persistence belongs to the shell; this
//! state only holds what is currently on the shelf.

use std::sync::{Arc, RwLock};

use aurum_core::{JewelryProduct, ProductField};

use crate::error::{ApiError, ErrorCode};

#[derive(Debug, Default)]
pub struct CatalogState {
    products: Arc<RwLock<Vec<JewelryProduct>>>,
}

impl CatalogState {
    pub fn new() -> Self {
        CatalogState::default()
    }

    pub fn from_products(products: Vec<JewelryProduct>) -> Self {
        CatalogState {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Executes a function with read access to the product list.
    pub fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[JewelryProduct]) -> R,
    {
        let products = self.products.read().expect("Catalog lock poisoned");
        f(&products)
    }

    /// Returns a clone of the product with the given ID.
    pub fn get(&self, id: &str) -> Result<JewelryProduct, ApiError> {
        self.with_products(|products| products.iter().find(|p| p.id == id).cloned())
            .ok_or_else(|| ApiError::not_found("Product", id))
    }

    /// Validates and inserts a product. SKUs are unique, ignoring case.
    pub fn insert(&self, product: JewelryProduct) -> Result<(), ApiError> {
        product.validate()?;

        let mut products = self.products.write().expect("Catalog lock poisoned");
        if products.iter().any(|p| p.sku.eq_ignore_ascii_case(&product.sku)) {
            return Err(ApiError::new(
                ErrorCode::ValidationError,
                format!("sku '{}' already exists", product.sku),
            ));
        }
        products.push(product);
        Ok(())
    }

    /// Applies a field update and returns the updated product.
    pub fn update(&self, id: &str, update: ProductField) -> Result<JewelryProduct, ApiError> {
        let mut products = self.products.write().expect("Catalog lock poisoned");
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::not_found("Product", id))?;

        product.apply(update)?;
        Ok(product.clone())
    }
}
