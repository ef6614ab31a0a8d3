//! Product service - catalogue use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateProduct, EntityId, Product, UpdateProduct};
use crate::errors::AppResult;
use crate::infra::ProductRepository;
use crate::types::{PaginationParams, ProductPage};

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate and store a new product
    async fn create_product(&self, input: CreateProduct) -> AppResult<Product>;

    /// Get a product by ID
    async fn get_product(&self, id: EntityId) -> AppResult<Product>;

    /// List one page of products with page totals
    async fn list_products(&self, params: PaginationParams) -> AppResult<ProductPage>;

    /// Merge the supplied fields into an existing product
    async fn update_product(&self, id: EntityId, changes: UpdateProduct) -> AppResult<Product>;

    /// Delete an existing product
    async fn delete_product(&self, id: EntityId) -> AppResult<()>;
}

/// Concrete implementation of ProductService.
pub struct ProductCatalog {
    products: Arc<dyn ProductRepository>,
}

impl ProductCatalog {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductService for ProductCatalog {
    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        let product = Product::new(input.name, input.description, input.price)?;
        self.products.create(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    async fn get_product(&self, id: EntityId) -> AppResult<Product> {
        self.products.find_by_id(id).await
    }

    async fn list_products(&self, params: PaginationParams) -> AppResult<ProductPage> {
        let products = self.products.find_all(&params).await?;
        let total = self.products.count().await?;

        Ok(ProductPage::new(products, &params, total))
    }

    async fn update_product(&self, id: EntityId, changes: UpdateProduct) -> AppResult<Product> {
        let mut product = self.products.find_by_id(id).await?;
        changes.apply_to(&mut product);
        product.validate()?;

        self.products.update(&product).await?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    async fn delete_product(&self, id: EntityId) -> AppResult<()> {
        self.products.find_by_id(id).await?;
        self.products.delete(id).await?;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, ValidationError};
    use crate::infra::MockProductRepository;
    use crate::types::SortOrder;
    use mockall::predicate::eq;

    fn service(repo: MockProductRepository) -> ProductCatalog {
        ProductCatalog::new(Arc::new(repo))
    }

    fn laptop() -> Product {
        Product::new("Laptop", "Macbook M1", 1100.0).unwrap()
    }

    #[tokio::test]
    async fn test_create_product_stores_valid_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .withf(|p: &Product| p.name == "Laptop" && p.price == 1100.0)
            .times(1)
            .returning(|_| Ok(()));

        let product = service(repo)
            .create_product(CreateProduct {
                name: "Laptop".to_string(),
                description: "Macbook M1".to_string(),
                price: 1100.0,
            })
            .await
            .unwrap();

        assert_eq!(product.description, "Macbook M1");
    }

    #[tokio::test]
    async fn test_create_invalid_product_skips_storage() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let result = service(repo)
            .create_product(CreateProduct {
                name: "Laptop".to_string(),
                description: String::new(),
                price: 0.0,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Invalid(ValidationError::PriceRequired))
        ));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let id = EntityId::new();
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|_| Err(AppError::NotFound));

        let result = service(repo).get_product(id).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_products_computes_total_pages() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all()
            .withf(|params: &PaginationParams| params.page == 3 && params.limit == 10)
            .returning(|_| {
                Ok(vec![
                    Product::new("Product 21", "", 1.0).unwrap(),
                    Product::new("Product 22", "", 1.0).unwrap(),
                    Product::new("Product 23", "", 1.0).unwrap(),
                ])
            });
        repo.expect_count().returning(|| Ok(23));

        let page = service(repo)
            .list_products(PaginationParams::new(3, 10, SortOrder::Asc))
            .await
            .unwrap();

        assert_eq!(page.items_amount, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_update_product_merges_fields() {
        let existing = laptop();
        let id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(existing.clone()));
        repo.expect_update()
            .withf(|p: &Product| p.name == "X" && p.price == 1100.0 && p.description == "Macbook M1")
            .times(1)
            .returning(|_| Ok(()));

        let updated = service(repo)
            .update_product(
                id,
                UpdateProduct {
                    name: "X".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "X");
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_update().never();

        let result = service(repo)
            .update_product(EntityId::new(), UpdateProduct::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_checks_existence_first() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_delete().never();

        let result = service(repo).delete_product(EntityId::new()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let existing = laptop();
        let id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(existing.clone()));
        repo.expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete_product(id).await.is_ok());
    }
}
