//! Migrator registering entity-specific migrations in dependency order:
//! areas and services first, then shops (references services), then
//! reviews (references shops). Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_areas;
mod m20240101_000002_create_services;
mod m20240101_000003_create_shops;
mod m20240101_000004_create_reviews;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_areas::Migration),
            Box::new(m20240101_000002_create_services::Migration),
            Box::new(m20240101_000003_create_shops::Migration),
            Box::new(m20240101_000004_create_reviews::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
