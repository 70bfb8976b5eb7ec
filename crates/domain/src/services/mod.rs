//! Shared service helpers such as the process clock, sleep policy and
//! telemetry wiring.

pub mod clock;
pub mod sleep;
pub mod telemetry;

pub use clock::*;
pub use sleep::*;
pub use telemetry::*;
