//! Create embedded_movies table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmbeddedMovies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmbeddedMovies::Id)
                            .string_len(24)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmbeddedMovies::Title).string().not_null())
                    .col(ColumnDef::new(EmbeddedMovies::Plot).text())
                    .col(ColumnDef::new(EmbeddedMovies::Fullplot).text())
                    .col(ColumnDef::new(EmbeddedMovies::Genres).json())
                    .col(ColumnDef::new(EmbeddedMovies::Runtime).integer())
                    .col(ColumnDef::new(EmbeddedMovies::Cast).json())
                    .col(ColumnDef::new(EmbeddedMovies::Poster).string())
                    .col(ColumnDef::new(EmbeddedMovies::Languages).json())
                    .col(ColumnDef::new(EmbeddedMovies::Released).timestamp_with_time_zone())
                    .col(ColumnDef::new(EmbeddedMovies::Directors).json())
                    .col(ColumnDef::new(EmbeddedMovies::Writers).json())
                    .col(ColumnDef::new(EmbeddedMovies::Rated).string())
                    .col(ColumnDef::new(EmbeddedMovies::Awards).json())
                    .col(ColumnDef::new(EmbeddedMovies::Year).integer())
                    .col(ColumnDef::new(EmbeddedMovies::Imdb).json())
                    .col(ColumnDef::new(EmbeddedMovies::Countries).json())
                    .col(ColumnDef::new(EmbeddedMovies::Type).string())
                    .col(ColumnDef::new(EmbeddedMovies::NumMflixComments).integer())
                    .col(ColumnDef::new(EmbeddedMovies::PlotEmbedding).json())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmbeddedMovies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum EmbeddedMovies {
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
    PlotEmbedding,
}
