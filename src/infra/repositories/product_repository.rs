//! Product repository.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use super::entities::product::{ActiveModel, Column as ProductColumn, Entity as ProductEntity};
use crate::config::MAX_PAGINATION_VALUE;
use crate::domain::{EntityId, Product};
use crate::errors::{AppError, AppResult};
use crate::types::{PaginationParams, SortOrder};

#[cfg(test)]
use mockall::automock;

/// Product persistence port.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// Find product by ID, `NotFound` if absent
    async fn find_by_id(&self, id: EntityId) -> AppResult<Product>;

    /// One page of products ordered by creation time
    async fn find_all(&self, params: &PaginationParams) -> AppResult<Vec<Product>>;

    /// Overwrite every column of the row with `product.id`
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Physically remove a product, `NotFound` if absent
    async fn delete(&self, id: EntityId) -> AppResult<()>;

    /// Total number of products
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        ProductEntity::insert(ActiveModel::from(product))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Product> {
        ProductEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await?
            .map(Product::from)
            .ok_or(AppError::NotFound)
    }

    async fn find_all(&self, params: &PaginationParams) -> AppResult<Vec<Product>> {
        let order = match params.sort {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let models = ProductEntity::find()
            .order_by(ProductColumn::CreatedAt, order)
            .offset(params.offset())
            .limit(params.limit.min(MAX_PAGINATION_VALUE))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let result = ProductEntity::update_many()
            .set(ActiveModel::from(product))
            .filter(ProductColumn::Id.eq(product.id.as_uuid()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(ProductEntity::find().count(&self.db).await?)
    }
}
