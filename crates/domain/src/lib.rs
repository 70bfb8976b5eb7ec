//! Domain-level building blocks shared by the frontend, backend and data
//! tier binaries: configuration, wire bodies, the sleep policy, the process
//! clock, telemetry wiring and the storage seam.

pub mod config;
pub mod model;
pub mod services;
pub mod storage;

pub use config::{ConfigError, StorageConfig, Tier, TierConfig};
pub use storage::{ProbeQuery, QueryProbe, QueryTiming, StorageError, StorageResult};
