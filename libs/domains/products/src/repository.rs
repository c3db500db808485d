use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{
    seed_products, CreateProduct, Product, ProductId, UpdateProductPatch, UpdateProductPut,
};

/// Repository trait for Product persistence
///
/// Lookups that miss return `None`/`false`; errors are reserved for the
/// backend itself failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in insertion order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// Insert a new product, assigning the next id
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace every field but the id
    async fn replace(&self, id: ProductId, input: UpdateProductPut)
        -> ProductResult<Option<Product>>;

    /// Update only the supplied fields
    async fn patch_fields(
        &self,
        id: ProductId,
        patch: UpdateProductPatch,
    ) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, reporting whether it existed
    async fn remove_by_id(&self, id: ProductId) -> ProductResult<bool>;
}

/// In-memory product store.
///
/// A single lock guards the whole collection, so next-id assignment and
/// insertion happen atomically. Clones share the same records.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the given records
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Store holding the startup catalogue
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }
}

/// Next id is one past the current maximum, so deleting the highest record
/// frees its id for reuse.
fn next_id(products: &[Product]) -> ProductId {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = Product::new(next_id(&products), input.name, input.price);
        products.push(product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn replace(
        &self,
        id: ProductId,
        input: UpdateProductPut,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.replace_with(input);

        tracing::info!(product_id = id, "Replaced product");
        Ok(Some(product.clone()))
    }

    async fn patch_fields(
        &self,
        id: ProductId,
        patch: UpdateProductPatch,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.apply_patch(patch);

        tracing::info!(product_id = id, "Patched product");
        Ok(Some(product.clone()))
    }

    async fn remove_by_id(&self, id: ProductId) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                tracing::info!(product_id = id, "Deleted product");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
