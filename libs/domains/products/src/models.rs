use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A stocked product.
///
/// `id` is assigned by the store on creation and never reused; `barcode` is
/// unique across all products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    /// Unique across all products
    #[schema(example = "4006381333931")]
    pub barcode: String,
    /// Units on hand; not floored by create/update
    #[schema(example = 5)]
    pub quantity: i32,
}

impl Product {
    /// Builds the stored record for `input` under a store-assigned `id`.
    pub fn from_input(id: i64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            barcode: input.barcode,
            quantity: input.quantity,
        }
    }

    /// Replaces every mutable field with the values from `input`. The id is kept.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.barcode = input.barcode;
        self.quantity = input.quantity;
    }

    /// Adds `delta` to the quantity, clamping the result at zero.
    pub fn adjust_quantity(&mut self, delta: i32) {
        self.quantity = self.quantity.saturating_add(delta).max(0);
    }
}

/// Create/update payload.
///
/// Any `id` sent by the client is ignored; `name` and `quantity` fall back to
/// `""` and `0` when omitted. An explicit `"name": null` is read as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "4006381333931")]
    pub barcode: String,
    #[serde(default)]
    #[schema(example = 5)]
    pub quantity: i32,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, barcode: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            barcode: barcode.into(),
            quantity,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Quick add/remove of stock; the resulting quantity never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StockAdjustment {
    /// Units to add (positive) or remove (negative)
    #[schema(example = -1)]
    pub delta: i32,
}
