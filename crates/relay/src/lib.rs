//! HTTP glue shared by the three tiers: the forward-and-relay client, the
//! actix-web renderings of its outcomes, the request-scoped sleep, and a few
//! small response helpers.

mod client;
mod pause;
mod response;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use client::{RelayClient, RelayError, RelayOutcome};
pub use pause::pause;
pub use response::{json_with_status, metrics_handler, status_or_internal};
