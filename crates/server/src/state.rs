use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use service::directory::{Directory, SeaOrmRepository};

/// Router state: the directory services over one shared connection pool.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory<SeaOrmRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, operation_timeout: Duration) -> Self {
        let repo = Arc::new(SeaOrmRepository::new(db));
        Self { directory: Arc::new(Directory::new(repo, operation_timeout)) }
    }
}
