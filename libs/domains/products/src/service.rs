//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, Product, ProductId, ProductQuery, UpdateProductPatch, UpdateProductPut,
};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Filtering lives here; everything else passes straight through to the
/// repository, which owns id assignment.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, narrowed by price ceiling and/or name search
    #[instrument(skip(self))]
    pub async fn get_all_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.repository.list_all().await?;
        Ok(products.into_iter().filter(|p| query.matches(p)).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.insert(input).await
    }

    /// Replace a product's name and price
    #[instrument(skip(self, input))]
    pub async fn update_product_put(
        &self,
        id: ProductId,
        input: UpdateProductPut,
    ) -> ProductResult<Option<Product>> {
        self.repository.replace(id, input).await
    }

    /// Change only the supplied fields
    #[instrument(skip(self, patch))]
    pub async fn update_product_patch(
        &self,
        id: ProductId,
        patch: UpdateProductPatch,
    ) -> ProductResult<Option<Product>> {
        self.repository.patch_fields(id, patch).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product_by_id(&self, id: ProductId) -> ProductResult<bool> {
        self.repository.remove_by_id(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
