//! Integration tests for Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The migrated schema matches the entity
//! - Identities are generated by the database
//! - DECIMAL(18,2) prices survive the round trip
//!
//! They need a Docker daemon: `cargo test -- --ignored`

use domain_products::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_add_and_list_products() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("add_and_list");

    let input = NewProduct {
        name: builder.name("product", "main"),
        description: Some("Integration test product".to_string()),
        price: builder.price(),
    };

    let created = repo.add_product(input.clone()).await.unwrap();
    assert_generated_id(created.id, "created product");
    assert_eq!(created.name, input.name);
    assert_eq!(created.description, input.description);
    assert_eq!(created.price, input.price);

    let listed = repo.get_products().await.unwrap();
    let found = assert_some(
        listed.into_iter().find(|p| p.id == created.id),
        "created product should be listed",
    );
    assert_eq!(found, created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_identities_are_distinct() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("distinct_ids");

    let mut ids = HashSet::new();
    for suffix in ["a", "b", "c"] {
        let product = repo
            .add_product(NewProduct {
                name: builder.name("product", suffix),
                description: None,
                price: Decimal::ONE,
            })
            .await
            .unwrap();
        assert_generated_id(product.id, suffix);
        assert!(ids.insert(product.id));
    }

    assert_eq!(repo.get_products().await.unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_keeps_two_decimal_places() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let product = repo
        .add_product(NewProduct {
            name: String::new(),
            description: None,
            price: Decimal::new(-1234567, 2),
        })
        .await
        .unwrap();

    assert_eq!(product.name, "");
    assert_eq!(product.price, Decimal::new(-1234567, 2));
    assert_eq!(product.price.scale(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_empty_table_lists_nothing() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    assert!(repo.get_products().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_closed_pool_surfaces_database_error() {
    let db = TestDatabase::new().await;
    let connection = db.connection();
    let repo = PgProductRepository::new(connection.clone());

    connection.close().await.unwrap();

    let result = repo.get_products().await;
    assert!(matches!(result, Err(ProductError::Database(_))));
}
