//! Product handlers. Every route requires a bearer token.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};

use crate::api::extractors::JsonBody;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{CreateProduct, EntityId, Product, UpdateProduct};
use crate::errors::AppResult;
use crate::types::{ListQuery, PaginationParams, ProductPage};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Malformed or invalid product", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    JsonBody(payload): JsonBody<CreateProduct>,
) -> AppResult<StatusCode> {
    let product = state.product_service.create_product(payload).await?;
    tracing::debug!(product_id = %product.id, user_id = %current_user.id, "Create product request served");

    Ok(StatusCode::CREATED)
}

/// List products, one page at a time
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductPage),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ProductPage>> {
    let page = state
        .product_service
        .list_products(PaginationParams::from(query))
        .await?;

    Ok(Json(page))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Malformed ID", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = EntityId::parse(&id)?;
    let product = state.product_service.get_product(id).await?;

    Ok(Json(product))
}

/// Update a product; empty fields keep their current value
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Malformed ID or body", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateProduct>,
) -> AppResult<StatusCode> {
    let id = EntityId::parse(&id)?;
    state.product_service.update_product(id, payload).await?;
    tracing::debug!(product_id = %id, user_id = %current_user.id, "Update product request served");

    Ok(StatusCode::OK)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Malformed ID", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = EntityId::parse(&id)?;
    state.product_service.delete_product(id).await?;
    tracing::debug!(product_id = %id, user_id = %current_user.id, "Delete product request served");

    Ok(StatusCode::OK)
}
