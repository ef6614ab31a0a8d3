//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AuthService, ProductService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Product service
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    /// Create application state backed by the relational store.
    pub fn from_config(database: &Database, config: Config) -> Self {
        Self::from_services(&Services::from_connection(
            database.get_connection(),
            config,
        ))
    }

    /// Create application state from any service container.
    pub fn from_services(container: &dyn ServiceContainer) -> Self {
        Self {
            auth_service: container.auth(),
            product_service: container.products(),
        }
    }
}
