use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::{
    entity,
    error::ProductResult,
    models::{NewProduct, Product},
    repository::ProductRepository,
};

/// Relational implementation of [`ProductRepository`] backed by the
/// `products` table.
///
/// Holds a pooled connection handle; every statement checks out its own
/// connection, so one instance serves any number of concurrent requests.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn add_product(&self, product: NewProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        // Single INSERT ... RETURNING round trip
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Added product");
        Ok(model.into())
    }

    async fn get_products(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find().all(&self.db).await?;

        tracing::debug!(count = models.len(), "Loaded products");
        Ok(models.into_iter().map(Product::from).collect())
    }
}
