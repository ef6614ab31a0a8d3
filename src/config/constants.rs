//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Page used when the `page` query parameter is missing or unparsable
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size used when the `limit` query parameter is missing or unparsable
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Page size substituted for an explicit `limit=0`
pub const ZERO_LIMIT_PAGE_SIZE: u64 = 1;

/// Upper bound for page, limit and offset; SQL binds them as signed 64-bit
pub const MAX_PAGINATION_VALUE: u64 = i64::MAX as u64;

/// Sort value selecting descending creation order
pub const SORT_DESC: &str = "desc";

// =============================================================================
// Products
// =============================================================================

/// Smallest price an update is allowed to write; lower values are ignored
pub const MIN_UPDATE_PRICE: f64 = 1.0;

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default token lifetime in seconds
pub const DEFAULT_JWT_EXPIRES_IN_SECONDS: i64 = 3600;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Secret used by debug builds when JWT_SECRET is not set
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";

/// Default size of the connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
