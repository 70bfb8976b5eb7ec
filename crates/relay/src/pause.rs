use actix_web::rt::time::sleep;
use metrics::histogram;
use tracing::info;

use tier_domain::services::SleepPolicy;

/// Applies the tier's sleep policy to a client-requested value and waits
/// that long. Only the current request is suspended. Returns the total that
/// was slept, which is what gets reported and forwarded.
pub async fn pause(policy: &SleepPolicy, requested: i64) -> i64 {
    let total = policy.total_seconds(requested);
    info!(requested, sleep_seconds = total, "sleeping");
    histogram!("sleep_seconds").record(total as f64);
    sleep(SleepPolicy::duration(total)).await;
    total
}
