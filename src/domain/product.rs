//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EntityId;
use crate::config::MIN_UPDATE_PRICE;
use crate::errors::ValidationError;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    #[schema(value_type = String, format = Uuid, example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: EntityId,
    /// Product name
    #[schema(example = "Laptop")]
    pub name: String,
    /// Free-form description, may be empty
    #[schema(example = "Macbook M1")]
    pub description: String,
    /// Unit price
    #[schema(example = 1100.0)]
    pub price: f64,
    /// Creation timestamp, used as the listing order
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a validated product with a fresh identifier.
    ///
    /// # Errors
    /// * [`ValidationError::NameRequired`] - empty name
    /// * [`ValidationError::PriceRequired`] - zero price
    /// * [`ValidationError::PriceInvalid`] - negative price
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let product = Self {
            id: EntityId::new(),
            name: name.into(),
            description: description.into(),
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Check the current field values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.price == 0.0 {
            return Err(ValidationError::PriceRequired);
        }
        if self.price < 0.0 {
            return Err(ValidationError::PriceInvalid);
        }
        Ok(())
    }
}

/// Product creation data transfer object
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateProduct {
    /// Product name
    #[schema(example = "Laptop")]
    pub name: String,
    /// Product description
    #[schema(example = "Macbook M1")]
    pub description: String,
    /// Unit price, must be positive
    #[schema(example = 1100.0)]
    pub price: f64,
}

/// Partial product update.
///
/// Empty strings and prices below 1.0 mean "keep the current value".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateProduct {
    /// New name
    #[schema(example = "Laptop Pro")]
    pub name: String,
    /// New description
    #[schema(example = "Macbook M2")]
    pub description: String,
    /// New price (ignored below 1.0)
    #[schema(example = 1500.0)]
    pub price: f64,
}

impl UpdateProduct {
    /// Merge the supplied fields into `product`.
    pub fn apply_to(self, product: &mut Product) {
        if !self.name.is_empty() {
            product.name = self.name;
        }
        if !self.description.is_empty() {
            product.description = self.description;
        }
        if self.price >= MIN_UPDATE_PRICE {
            product.price = self.price;
        }
    }
}
