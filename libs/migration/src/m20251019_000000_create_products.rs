use sea_orm_migration::{prelude::*, schema::*};

/// Unique index on `products.barcode`
const PRODUCTS_BARCODE_INDEX: &str = "idx_products_barcode_unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Products::Id))
                    .col(string(Products::Name).default(""))
                    .col(string(Products::Barcode))
                    .col(integer(Products::Quantity).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(PRODUCTS_BARCODE_INDEX)
                    .table(Products::Table)
                    .col(Products::Barcode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Barcode,
    Quantity,
}
