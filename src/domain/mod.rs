//! Domain layer - Core business entities and logic
//!
//! Entities and value objects independent of HTTP and storage concerns.

pub mod id;
pub mod password;
pub mod product;
pub mod user;

pub use id::EntityId;
pub use password::Password;
pub use product::{CreateProduct, Product, UpdateProduct};
pub use user::{CreateUser, User};
