use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductInput};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub barcode: String,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag for product endpoints
    pub const TAG: &'static str = "products";
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            barcode: model.barcode,
            quantity: model.quantity,
        }
    }
}

// New row: the id is left to BIGSERIAL.
impl From<ProductInput> for ActiveModel {
    fn from(input: ProductInput) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            barcode: Set(input.barcode),
            quantity: Set(input.quantity),
        }
    }
}

// Existing row: every mutable column is rewritten, keyed by the unchanged id.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: Unchanged(product.id),
            name: Set(product.name),
            barcode: Set(product.barcode),
            quantity: Set(product.quantity),
        }
    }
}
