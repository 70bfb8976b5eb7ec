//! SeaORM-backed storage adapter for the data tier. The schema is irrelevant
//! to the service; it only needs a live connection to run timed raw queries.

mod probe_store;

use std::sync::Arc;

use sea_orm::{Database, DatabaseConnection};
use tier_domain::storage::{StorageError, StorageResult};

/// Shared storage handle used by the data tier handlers.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStorage {
    /// Connects to the provided database URL (SQLite by default).
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        let db = Database::connect(database_url)
            .await
            .map_err(StorageError::from_source)?;
        Ok(Self { db: Arc::new(db) })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }
}
