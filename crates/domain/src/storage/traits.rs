use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Common result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(String),
}

impl StorageError {
    pub fn from_source(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }
}

/// The two canned queries the data tier knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeQuery {
    /// Constant select that touches no table.
    Trivial,
    /// Recursive CTE generating 1,000,000 rows and filtering them down.
    Slow,
}

impl ProbeQuery {
    pub fn sql(self) -> &'static str {
        match self {
            ProbeQuery::Trivial => "SELECT 1",
            ProbeQuery::Slow => {
                "WITH RECURSIVE r(i) AS (VALUES(0) \
                 UNION ALL \
                 SELECT i FROM r \
                 LIMIT 1000000\
                 ) SELECT i FROM r WHERE i = 1;"
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProbeQuery::Trivial => "trivial",
            ProbeQuery::Slow => "slow",
        }
    }
}

/// Wall-clock cost of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTiming {
    pub rows: usize,
    pub elapsed: Duration,
}

#[async_trait]
pub trait QueryProbe: Send + Sync {
    async fn run_probe(&self, query: ProbeQuery) -> StorageResult<QueryTiming>;
}
