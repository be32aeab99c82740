use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// The store owns id assignment and barcode uniqueness: `insert` returns the
/// record with its new id, and both writes fail with
/// [`ProductError::DuplicateBarcode`] on a collision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by ascending id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    async fn find_by_barcode(&self, barcode: &str) -> ProductResult<Option<Product>>;

    /// Persist a new product; the store assigns the id
    async fn insert(&self, input: ProductInput) -> ProductResult<Product>;

    /// Overwrite an existing product; `NotFound` if the id is gone
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Remove a product, returning whether a row existed
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids come from a monotonic counter, so deleted ids are never handed out again.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn barcode_taken(products: &BTreeMap<i64, Product>, barcode: &str, except: Option<i64>) -> bool {
    products
        .values()
        .any(|p| p.barcode == barcode && Some(p.id) != except)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_by_barcode(&self, barcode: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.values().find(|p| p.barcode == barcode).cloned())
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if barcode_taken(&products, &input.barcode, None) {
            return Err(ProductError::DuplicateBarcode(input.barcode));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::from_input(id, input);
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(ProductError::NotFound(product.id));
        }
        if barcode_taken(&products, &product.barcode, Some(product.id)) {
            return Err(ProductError::DuplicateBarcode(product.barcode));
        }

        products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let removed = products.remove(&id).is_some();

        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}
