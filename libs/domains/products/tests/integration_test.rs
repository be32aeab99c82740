//! Integration tests for Products domain
//!
//! These use real PostgreSQL via testcontainers to check that the migration,
//! the unique barcode index and the SeaORM queries agree with the in-memory
//! behavior. Run with `cargo test -- --ignored` on a machine with Docker.

use domain_products::*;
use test_utils::{assertions::*, TestDataBuilder, TestDatabase};

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = ProductInput::new(builder.name("product", "main"), builder.barcode("main"), 5);
    let created = repo.insert(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.barcode, input.barcode);
    assert_eq!(created.quantity, 5);

    let retrieved = repo.find_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");
    assert_id_eq(retrieved.id, created.id, "retrieved product id");
    assert_eq!(retrieved, created);

    let by_barcode = repo.find_by_barcode(&input.barcode).await.unwrap();
    assert_eq!(by_barcode, Some(created));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_barcode_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("duplicate_barcode");
    let barcode = builder.barcode("shared");

    repo.insert(ProductInput::new("First", barcode.clone(), 1))
        .await
        .unwrap();

    let result = repo.insert(ProductInput::new("Second", barcode.clone(), 2)).await;
    assert!(
        matches!(result, Err(ProductError::DuplicateBarcode(ref b)) if *b == barcode),
        "expected DuplicateBarcode, got {:?}",
        result
    );

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_and_delete");

    let mut product = repo
        .insert(ProductInput::new("Widget", builder.barcode("w"), 5))
        .await
        .unwrap();

    product.name = "Widget2".to_string();
    product.quantity = 10;
    let updated = repo.update(product.clone()).await.unwrap();
    assert_eq!(updated, product);

    let stored = assert_some(
        repo.find_by_id(product.id).await.unwrap(),
        "updated product should persist",
    );
    assert_eq!(stored, product);

    assert!(repo.delete(product.id).await.unwrap());
    assert!(!repo.delete(product.id).await.unwrap());
    assert_eq!(repo.find_by_id(product.id).await.unwrap(), None);

    let result = repo.update(product).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("ordered");

    let mut ids = Vec::new();
    for suffix in ["c", "a", "b"] {
        let product = repo
            .insert(ProductInput::new(suffix, builder.barcode(suffix), 0))
            .await
            .unwrap();
        ids.push(product.id);
    }

    let listed: Vec<i64> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(listed, ids);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_adjust_stock_persists() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("adjust_stock");

    let product = service
        .create_product(ProductInput::new("Widget", builder.barcode("w"), 2))
        .await
        .unwrap();

    let adjusted = service.adjust_stock(product.id, -5).await.unwrap();
    assert_eq!(adjusted.quantity, 0);

    let stored = service.get_product(product.id).await.unwrap();
    assert_eq!(stored.quantity, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_update_onto_taken_barcode_conflicts() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("update_conflict");

    let first = service
        .create_product(ProductInput::new("First", builder.barcode("1"), 1))
        .await
        .unwrap();
    let second = service
        .create_product(ProductInput::new("Second", builder.barcode("2"), 1))
        .await
        .unwrap();

    let result = service
        .update_product(second.id, ProductInput::new("Second", first.barcode.clone(), 1))
        .await;
    assert!(matches!(result, Err(ProductError::DuplicateBarcode(_))));

    service.delete_product(first.id).await.unwrap();
    service.delete_product(first.id).await.unwrap();
}
