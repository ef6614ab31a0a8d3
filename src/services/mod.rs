//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and repositories. They depend on
//! repository traits, never on a concrete store.

mod auth_service;
pub mod container;
mod product_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use product_service::{ProductCatalog, ProductService};
