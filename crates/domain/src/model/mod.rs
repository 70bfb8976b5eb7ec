//! Wire-level response bodies shared by every tier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned whenever a peer cannot be reached at all.
pub const INTERNAL_SERVICE_ERROR: &str = "Internal Service Error";

/// Standard success wrapper: the payload plus the status code it was
/// produced with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub response: T,
    #[serde(rename = "ReturnCode")]
    pub return_code: i64,
}

impl<T> Envelope<T> {
    pub fn new(response: T, return_code: i64) -> Self {
        Self {
            response,
            return_code,
        }
    }
}

/// Handled-error wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_SERVICE_ERROR)
    }

    /// Names the hop that answered with a non-200 code. The upstream body is
    /// intentionally not carried.
    pub fn upstream(destination: &str, status: u16) -> Self {
        Self::new(format!("From: {destination} ReturnCode: {status}"))
    }
}

/// Root endpoint tag identifying which tier answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIdentity {
    #[serde(rename = "Microservice")]
    pub microservice: String,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            microservice: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(rename = "Status")]
    pub status: String,
    pub uptime: f64,
    pub boottime: DateTime<Utc>,
}

impl HealthReport {
    pub fn ok(uptime: f64, boottime: DateTime<Utc>) -> Self {
        Self {
            status: "OK".to_string(),
            uptime,
            boottime,
        }
    }
}

/// Data tier query timing, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    pub time_taken: f64,
    #[serde(rename = "ReturnCode")]
    pub return_code: i64,
}
