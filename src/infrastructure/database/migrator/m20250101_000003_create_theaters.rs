//! Create theaters table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Theaters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Theaters::Id)
                            .string_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Theaters::TheaterId).integer().not_null())
                    .col(ColumnDef::new(Theaters::Location).json().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Theaters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Theaters {
    Table,
    Id,
    TheaterId,
    Location,
}
