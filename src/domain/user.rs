//! User domain entity and related types.

use serde::Deserialize;
use utoipa::ToSchema;

use super::{EntityId, Password};
use crate::errors::AppResult;

/// User domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    /// Lookup key for login; uniqueness is left to storage
    pub email: String,
    pub password: Password,
}

impl User {
    /// Create a user, hashing `raw_password` immediately.
    ///
    /// No field is validated; empty values are stored as given.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        raw_password: &str,
    ) -> AppResult<Self> {
        Ok(Self {
            id: EntityId::new(),
            name: name.into(),
            email: email.into(),
            password: Password::new(raw_password)?,
        })
    }

    /// Check a candidate password against the stored hash.
    pub fn validate_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }
}

/// User registration data transfer object
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUser {
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "j@j.com")]
    pub email: String,
    /// Raw password
    #[schema(example = "123456")]
    pub password: String,
}
