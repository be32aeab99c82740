//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Product service providing the inventory operations
///
/// Reads go straight to the repository. Writes that depend on the current
/// record (update, stock adjustment) fetch, modify and save without any
/// compare-and-swap, so concurrent writers resolve last-writer-wins.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, ordered by id
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn get_by_barcode(&self, barcode: &str) -> ProductResult<Product> {
        self.repository
            .find_by_barcode(barcode)
            .await?
            .ok_or_else(|| ProductError::BarcodeNotFound(barcode.to_string()))
    }

    /// Create a product; the store assigns its id
    #[instrument(skip(self, input), fields(barcode = %input.barcode))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.repository.insert(input).await
    }

    /// Replace name, barcode and quantity of an existing product
    #[instrument(skip(self, input), fields(barcode = %input.barcode))]
    pub async fn update_product(&self, id: i64, input: ProductInput) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.apply(input);
        self.repository.update(product).await
    }

    /// Remove a product. Succeeds whether or not it existed.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(product_id = id, "Delete of absent product ignored");
        }
        Ok(())
    }

    /// Add `delta` units (negative to remove), clamping the quantity at zero
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: i64, delta: i32) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.adjust_quantity(delta);
        self.repository.update(product).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
