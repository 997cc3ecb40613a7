use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Data access for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its storage-assigned identity
    async fn add_product(&self, product: NewProduct) -> ProductResult<Product>;

    /// Every stored product, unfiltered and unpaginated
    async fn get_products(&self) -> ProductResult<Vec<Product>>;
}

#[derive(Debug)]
struct InMemoryState {
    next_id: i32,
    products: Vec<Product>,
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self {
            next_id: 1,
            products: Vec::new(),
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing).
///
/// Identities start at 1 and increase by one per insert, like a serial
/// column. Listing returns products in insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add_product(&self, product: NewProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        let product = Product {
            id: state.next_id,
            name: product.name,
            description: product.description,
            price: product.price,
        };
        state.next_id += 1;
        state.products.push(product.clone());

        tracing::info!(product_id = product.id, "Added product");
        Ok(product)
    }

    async fn get_products(&self) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn new_product(name: &str, cents: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price: Decimal::new(cents, 2),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_identities() {
        let repo = InMemoryProductRepository::new();

        let first = repo.add_product(new_product("first", 100)).await.unwrap();
        let second = repo.add_product(new_product("second", 200)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_products_returns_insertion_order() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.get_products().await.unwrap().is_empty());

        for (name, cents) in [("a", 100), ("b", 250), ("c", 999)] {
            repo.add_product(new_product(name, cents)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryProductRepository::new();
        let clone = repo.clone();

        clone.add_product(new_product("shared", 1)).await.unwrap();
        assert_eq!(repo.get_products().await.unwrap().len(), 1);
    }
}
