use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use anyhow::Result;

use crate::db::connect_with_config;



/// Fresh in-memory database with the full schema applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&configs::DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
