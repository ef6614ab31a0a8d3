//! Service Container - Centralized service access.

use std::sync::Arc;

use super::{AuthService, Authenticator, ProductCatalog, ProductService};
use crate::config::Config;
use crate::infra::{ProductRepository, ProductStore, UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductService>,
}

impl Services {
    /// Build every service on top of the given repositories
    pub fn new(
        products: Arc<dyn ProductRepository>,
        users: Arc<dyn UserRepository>,
        config: Config,
    ) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(users, config)),
            product_service: Arc::new(ProductCatalog::new(products)),
        }
    }

    /// Create service container backed by the relational store
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        Self::new(
            Arc::new(ProductStore::new(db.clone())),
            Arc::new(UserStore::new(db)),
            config,
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }
}
