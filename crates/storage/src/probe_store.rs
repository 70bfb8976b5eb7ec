use std::time::Instant;

use sea_orm::{ConnectionTrait, Statement};
use tier_domain::storage::{
    ProbeQuery, QueryProbe, QueryTiming, StorageError, StorageResult,
};
use tracing::info;

use crate::SeaOrmStorage;

#[async_trait::async_trait]
impl QueryProbe for SeaOrmStorage {
    async fn run_probe(&self, query: ProbeQuery) -> StorageResult<QueryTiming> {
        let backend = self.connection().get_database_backend();
        let statement = Statement::from_string(backend, query.sql());

        let started = Instant::now();
        let rows = self
            .connection()
            .query_all(statement)
            .await
            .map_err(StorageError::from_source)?;
        let elapsed = started.elapsed();

        info!(
            query = query.label(),
            rows = rows.len(),
            elapsed_secs = elapsed.as_secs_f64(),
            "time taken by query"
        );
        Ok(QueryTiming {
            rows: rows.len(),
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::connect("sqlite::memory:")
            .await
            .expect("storage inits")
    }

    #[tokio::test]
    async fn trivial_probe_returns_one_row() {
        let timing = storage().await.run_probe(ProbeQuery::Trivial).await.unwrap();
        assert_eq!(timing.rows, 1);
    }

    #[tokio::test]
    async fn slow_probe_filters_everything_out() {
        let timing = storage().await.run_probe(ProbeQuery::Slow).await.unwrap();
        assert_eq!(timing.rows, 0);
        assert!(timing.elapsed > std::time::Duration::ZERO);
    }

    #[tokio::test]
    async fn connect_reports_bad_urls() {
        let err = SeaOrmStorage::connect("not-a-database://nowhere")
            .await
            .err()
            .expect("connect fails");
        assert!(matches!(err, StorageError::Database(_)));
    }
}
