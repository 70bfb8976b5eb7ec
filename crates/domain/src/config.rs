//! Environment-driven configuration structures shared by all tier binaries.

use std::env;

use thiserror::Error;

const BACKEND_SERVICE_KEY: &str = "_BACKEND_SERVICE";
const FRONTEND_SERVICE_KEY: &str = "_FRONTEND_SERVICE";
const DB_SERVICE_KEY: &str = "_DB_SERVICE";
const DUMMY_SERVICE_KEY: &str = "_DUMMY_SERVICE";
const DEFAULT_SLEEP_KEY: &str = "_DEFAULT_SLEEP";
const INCREMENTAL_SLEEP_KEY: &str = "_INCREMENTAL_SLEEP";

const DEFAULT_BACKEND_SERVICE: &str = "http://backend-service";
const DEFAULT_FRONTEND_SERVICE: &str = "http://frontend-service";
const DEFAULT_DB_SERVICE: &str = "http://db-service";
const DEFAULT_SLEEP_SECONDS: i64 = 1;

const DEFAULT_DATABASE_URL: &str = "sqlite://testDB.db?mode=rwc";

/// One of the three independently deployed services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Frontend,
    Backend,
    DbService,
}

impl Tier {
    /// Fixed listening port for the tier.
    pub fn port(self) -> u16 {
        match self {
            Tier::Frontend => 8000,
            Tier::Backend => 8001,
            Tier::DbService => 8002,
        }
    }

    pub fn bind_address(self) -> String {
        format!("0.0.0.0:{}", self.port())
    }

    /// Seconds this tier adds on top of a clamped sleep request when
    /// `_INCREMENTAL_SLEEP` is unset.
    pub fn default_incremental_sleep(self) -> i64 {
        match self {
            Tier::Frontend => 1,
            Tier::Backend => 2,
            Tier::DbService => 3,
        }
    }

    /// Value reported under `Microservice` by the tier's root endpoint.
    pub fn identity(self) -> &'static str {
        match self {
            Tier::Frontend => "FrontEnd",
            Tier::Backend => "BackEnd",
            Tier::DbService => "DB Service",
        }
    }

    /// Prefix for tier-scoped ambient variables such as `BACKEND_LOG_FILTER`.
    pub fn env_prefix(self) -> &'static str {
        match self {
            Tier::Frontend => "FRONTEND",
            Tier::Backend => "BACKEND",
            Tier::DbService => "DBSERVICE",
        }
    }
}

/// Peer addresses and sleep knobs resolved once at startup and shared
/// read-only by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierConfig {
    tier: Tier,
    backend_service: String,
    frontend_service: String,
    db_service: String,
    dummy_service: Option<String>,
    default_sleep: i64,
    incremental_sleep: i64,
}

impl TierConfig {
    /// Hydrates `.env` (if present) and reads the process environment.
    pub fn load_from_env(tier: Tier) -> Result<Self, ConfigError> {
        hydrate_env_file()?;
        Self::from_lookup(tier, |key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset or blank
    /// keys fall back to the documented defaults.
    pub fn from_lookup<F>(tier: Tier, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key).and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };
        let read_number = |key: &'static str, default: i64| -> Result<i64, ConfigError> {
            match read(key) {
                Some(raw) => raw
                    .parse()
                    .map_err(|source| ConfigError::InvalidNumber { key, source }),
                None => Ok(default),
            }
        };

        Ok(Self {
            tier,
            backend_service: read(BACKEND_SERVICE_KEY)
                .unwrap_or_else(|| DEFAULT_BACKEND_SERVICE.to_string()),
            frontend_service: read(FRONTEND_SERVICE_KEY)
                .unwrap_or_else(|| DEFAULT_FRONTEND_SERVICE.to_string()),
            db_service: read(DB_SERVICE_KEY).unwrap_or_else(|| DEFAULT_DB_SERVICE.to_string()),
            dummy_service: read(DUMMY_SERVICE_KEY),
            default_sleep: read_number(DEFAULT_SLEEP_KEY, DEFAULT_SLEEP_SECONDS)?,
            incremental_sleep: read_number(
                INCREMENTAL_SLEEP_KEY,
                tier.default_incremental_sleep(),
            )?,
        })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn backend_service(&self) -> &str {
        &self.backend_service
    }

    pub fn frontend_service(&self) -> &str {
        &self.frontend_service
    }

    pub fn db_service(&self) -> &str {
        &self.db_service
    }

    /// Deliberately has no default; callers that need it must cope with the
    /// missing-key failure themselves.
    pub fn dummy_service(&self) -> Result<&str, ConfigError> {
        self.dummy_service
            .as_deref()
            .ok_or(ConfigError::MissingVar {
                key: DUMMY_SERVICE_KEY,
            })
    }

    pub fn default_sleep(&self) -> i64 {
        self.default_sleep
    }

    pub fn incremental_sleep(&self) -> i64 {
        self.incremental_sleep
    }

    pub fn bind_address(&self) -> String {
        self.tier.bind_address()
    }
}

/// Storage settings for the data tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    database_url: String,
}

impl StorageConfig {
    pub fn load_from_env() -> Result<Self, ConfigError> {
        hydrate_env_file()?;

        Ok(Self {
            database_url: get_optional_var("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

pub(crate) fn get_optional_var(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn hydrate_env_file() -> Result<(), ConfigError> {
    if env::var_os("TIER_SKIP_DOTENV").is_some() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(ConfigError::Dotenv { source: err }),
    }

    Ok(())
}

/// Errors emitted when `.env` hydration or environment parsing fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{key}`")]
    MissingVar { key: &'static str },
    #[error("invalid integer in `{key}`: {source}")]
    InvalidNumber {
        key: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to load .env file: {source}")]
    Dotenv {
        #[from]
        source: dotenvy::Error,
    },
}
