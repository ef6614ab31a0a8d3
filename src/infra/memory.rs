//! In-memory repository implementations.
//!
//! Same contracts as the SeaORM stores, without a database. Used by the
//! HTTP tests and handy for local experiments.

use async_trait::async_trait;
use sea_orm::DbErr;
use tokio::sync::RwLock;

use super::repositories::{ProductRepository, UserRepository};
use crate::domain::{EntityId, Product, User};
use crate::errors::{AppError, AppResult};
use crate::types::{PaginationParams, SortOrder};

/// Products kept in insertion order
#[derive(Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(DbErr::Custom(format!("duplicate product id {}", product.id)).into());
        }
        products.push(product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn find_all(&self, params: &PaginationParams) -> AppResult<Vec<Product>> {
        let mut products = self.products.read().await.clone();
        match params.sort {
            SortOrder::Asc => products.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Desc => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(products
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit as usize)
            .collect())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(AppError::NotFound)?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}

/// Users with the same unique-email rule as the `users` table
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(DbErr::Custom(format!("duplicate email {}", user.email)).into());
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(AppError::NotFound)
    }
}
