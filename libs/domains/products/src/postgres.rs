use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

/// PostgreSQL-backed repository using SeaORM.
///
/// Id assignment and barcode uniqueness are enforced by the `products` table
/// (BIGSERIAL primary key, unique index on `barcode`).
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
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn find_by_barcode(&self, barcode: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Barcode.eq(barcode))
            .one(&self.db)
            .await?;

        Ok(model.map(Product::from))
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        let barcode = input.barcode.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| ProductError::from_write(e, &barcode))?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let barcode = product.barcode.clone();
        let active_model: entity::ActiveModel = product.into();

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ProductError::NotFound(id),
            other => ProductError::from_write(other, &barcode),
        })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
