//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_movies;
mod m20250101_000003_create_theaters;
mod m20250101_000004_create_comments;
mod m20250101_000005_create_embedded_movies;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_movies::Migration),
            Box::new(m20250101_000003_create_theaters::Migration),
            Box::new(m20250101_000004_create_comments::Migration),
            Box::new(m20250101_000005_create_embedded_movies::Migration),
        ]
    }
}
