//! Create movies table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .string_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::Plot).text())
                    .col(ColumnDef::new(Movies::Fullplot).text())
                    .col(ColumnDef::new(Movies::Genres).json())
                    .col(ColumnDef::new(Movies::Runtime).integer())
                    .col(ColumnDef::new(Movies::Cast).json())
                    .col(ColumnDef::new(Movies::Poster).string())
                    .col(ColumnDef::new(Movies::Languages).json())
                    .col(ColumnDef::new(Movies::Released).timestamp_with_time_zone())
                    .col(ColumnDef::new(Movies::Directors).json())
                    .col(ColumnDef::new(Movies::Writers).json())
                    .col(ColumnDef::new(Movies::Rated).string())
                    .col(ColumnDef::new(Movies::Awards).json())
                    .col(ColumnDef::new(Movies::Year).integer())
                    .col(ColumnDef::new(Movies::Imdb).json())
                    .col(ColumnDef::new(Movies::Countries).json())
                    .col(ColumnDef::new(Movies::Type).string())
                    .col(ColumnDef::new(Movies::NumMflixComments).integer())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Movies {
    Table,
    Id,
    Title,
    Plot,
    Fullplot,
    Genres,
    Runtime,
    Cast,
    Poster,
    Languages,
    Released,
    Directors,
    Writers,
    Rated,
    Awards,
    Year,
    Imdb,
    Countries,
    Type,
    NumMflixComments,
}
