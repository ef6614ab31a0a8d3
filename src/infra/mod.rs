//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM repositories
//! - In-memory repositories

pub mod db;
pub mod memory;
pub mod repositories;

pub use db::{Database, Migrator};
pub use memory::{InMemoryProductStore, InMemoryUserStore};
pub use repositories::{ProductRepository, ProductStore, UserRepository, UserStore};

#[cfg(test)]
pub use repositories::{MockProductRepository, MockUserRepository};
