//! Repository tests against an in-memory SQLite database.
//!
//! Each test gets its own connection with the migrations applied.

use chrono::{Duration, Utc};

use product_api::config::Config;
use product_api::domain::{EntityId, Product, User};
use product_api::errors::AppError;
use product_api::infra::{
    Database, ProductRepository, ProductStore, UserRepository, UserStore,
};
use product_api::types::{PaginationParams, SortOrder};

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

async fn database() -> Database {
    let config = Config::new("sqlite::memory:", SECRET).unwrap();
    Database::connect(&config).await.expect("migrations should apply")
}

/// Insert `n` products named `Product 1..=n`, one second apart
async fn seed_products(store: &ProductStore, n: usize) {
    let base = Utc::now();
    for i in 1..=n {
        let mut product = Product::new(format!("Product {}", i), "", 10.0).unwrap();
        product.created_at = base + Duration::seconds(i as i64);
        store.create(&product).await.unwrap();
    }
}

fn names(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

// =============================================================================
// Product Repository Tests
// =============================================================================

#[tokio::test]
async fn test_create_and_find_product() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());

    let product = Product::new("Laptop", "Macbook M1", 1100.0).unwrap();
    store.create(&product).await.unwrap();

    let found = store.find_by_id(product.id).await.unwrap();
    assert_eq!(found.id, product.id);
    assert_eq!(found.name, "Laptop");
    assert_eq!(found.description, "Macbook M1");
    assert_eq!(found.price, 1100.0);
}

#[tokio::test]
async fn test_find_missing_product() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());

    let result = store.find_by_id(EntityId::new()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_pagination_over_twenty_three_products() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());
    seed_products(&store, 23).await;

    let first = store
        .find_all(&PaginationParams::new(1, 10, SortOrder::Asc))
        .await
        .unwrap();
    let second = store
        .find_all(&PaginationParams::new(2, 10, SortOrder::Asc))
        .await
        .unwrap();
    let third = store
        .find_all(&PaginationParams::new(3, 10, SortOrder::Asc))
        .await
        .unwrap();

    assert_eq!(first.len(), 10);
    assert_eq!(first[0].name, "Product 1");
    assert_eq!(first[9].name, "Product 10");
    assert_eq!(second[0].name, "Product 11");
    assert_eq!(
        names(&third),
        vec!["Product 21", "Product 22", "Product 23"]
    );
    assert_eq!(store.count().await.unwrap(), 23);
}

#[tokio::test]
async fn test_descending_order() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());
    seed_products(&store, 3).await;

    let page = store
        .find_all(&PaginationParams::new(1, 10, SortOrder::Desc))
        .await
        .unwrap();

    assert_eq!(
        names(&page),
        vec!["Product 3", "Product 2", "Product 1"]
    );
}

#[tokio::test]
async fn test_find_all_with_huge_limit_and_page() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());
    seed_products(&store, 3).await;

    let everything = store
        .find_all(&PaginationParams::new(1, u64::MAX, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(everything.len(), 3);

    let past_end = store
        .find_all(&PaginationParams::new(u64::MAX, u64::MAX, SortOrder::Asc))
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_update_product_persists() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());

    let mut product = Product::new("Laptop", "Macbook M1", 1100.0).unwrap();
    store.create(&product).await.unwrap();

    product.name = "Laptop Pro".to_string();
    product.price = 1500.0;
    store.update(&product).await.unwrap();

    let found = store.find_by_id(product.id).await.unwrap();
    assert_eq!(found.name, "Laptop Pro");
    assert_eq!(found.price, 1500.0);
    assert_eq!(found.description, "Macbook M1");
}

#[tokio::test]
async fn test_update_missing_product() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());

    let ghost = Product::new("Ghost", "", 1.0).unwrap();
    let result = store.update(&ghost).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_product() {
    let db = database().await;
    let store = ProductStore::new(db.get_connection());

    let product = Product::new("Laptop", "", 1100.0).unwrap();
    store.create(&product).await.unwrap();
    store.delete(product.id).await.unwrap();

    assert!(matches!(
        store.find_by_id(product.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        store.delete(product.id).await,
        Err(AppError::NotFound)
    ));
    assert_eq!(store.count().await.unwrap(), 0);
}

// =============================================================================
// User Repository Tests
// =============================================================================

#[tokio::test]
async fn test_create_and_find_user_by_email() {
    let db = database().await;
    let store = UserStore::new(db.get_connection());

    let user = User::new("John Doe", "j@j.com", "123456").unwrap();
    store.create(&user).await.unwrap();

    let found = store.find_by_email("j@j.com").await.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "John Doe");
    assert!(found.validate_password("123456"));
}

#[tokio::test]
async fn test_find_unknown_email() {
    let db = database().await;
    let store = UserStore::new(db.get_connection());

    let result = store.find_by_email("nobody@j.com").await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_duplicate_email_is_database_error() {
    let db = database().await;
    let store = UserStore::new(db.get_connection());

    store
        .create(&User::new("a", "j@j.com", "pw").unwrap())
        .await
        .unwrap();
    let result = store.create(&User::new("b", "j@j.com", "pw").unwrap()).await;

    assert!(matches!(result, Err(AppError::Database(_))));
}

// =============================================================================
// Migration Tests
// =============================================================================

#[tokio::test]
async fn test_all_migrations_applied() {
    let db = database().await;
    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
}
