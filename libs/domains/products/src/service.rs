//! Product Service - orchestration between the HTTP contracts and storage

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{AddProductRequest, NewProduct, ProductResponse};
use crate::repository::ProductRepository;

/// Maps contracts to entities and back, delegating persistence to the
/// repository. Errors from the repository propagate unchanged.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new product and return it with its generated identity
    #[instrument(skip(self, request), fields(product_name = %request.name))]
    pub async fn add_product(&self, request: AddProductRequest) -> ProductResult<ProductResponse> {
        let product = self.repository.add_product(NewProduct::from(request)).await?;
        Ok(product.into())
    }

    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ProductResult<Vec<ProductResponse>> {
        let products = self.repository.get_products().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::models::Product;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use sea_orm::{DbErr, RuntimeErr};

    fn request(name: &str) -> AddProductRequest {
        AddProductRequest {
            name: name.to_string(),
            description: Some("Oak".to_string()),
            price: Decimal::new(12550, 2),
        }
    }

    #[tokio::test]
    async fn test_add_product_passes_entity_without_identity() {
        let mut repo = MockProductRepository::new();
        repo.expect_add_product()
            .with(eq(NewProduct {
                name: "Table".to_string(),
                description: Some("Oak".to_string()),
                price: Decimal::new(12550, 2),
            }))
            .times(1)
            .returning(|p| {
                Ok(Product {
                    id: 3,
                    name: p.name,
                    description: p.description,
                    price: p.price,
                })
            });

        let service = ProductService::new(repo);
        let response = service.add_product(request("Table")).await.unwrap();

        assert_eq!(
            response,
            ProductResponse {
                id: 3,
                name: "Table".to_string(),
                description: Some("Oak".to_string()),
                price: Decimal::new(12550, 2),
            }
        );
    }

    #[tokio::test]
    async fn test_add_product_propagates_storage_error() {
        let mut repo = MockProductRepository::new();
        repo.expect_add_product().returning(|_| {
            Err(ProductError::Database(DbErr::Exec(RuntimeErr::Internal(
                "disk full".to_string(),
            ))))
        });

        let service = ProductService::new(repo);
        let result = service.add_product(request("Table")).await;

        assert!(matches!(result, Err(ProductError::Database(DbErr::Exec(_)))));
    }

    #[tokio::test]
    async fn test_get_products_maps_every_row() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_products().times(1).returning(|| {
            Ok(vec![
                Product {
                    id: 1,
                    name: "A".to_string(),
                    description: None,
                    price: Decimal::new(100, 2),
                },
                Product {
                    id: 2,
                    name: "B".to_string(),
                    description: Some("b".to_string()),
                    price: Decimal::new(-5, 2),
                },
            ])
        });

        let service = ProductService::new(repo);
        let products = service.get_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].price, Decimal::new(-5, 2));
    }

    #[tokio::test]
    async fn test_get_products_empty() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_products().returning(|| Ok(Vec::new()));

        let service = ProductService::new(repo);
        assert!(service.get_products().await.unwrap().is_empty());
    }
}
