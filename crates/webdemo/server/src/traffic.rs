//! Request timing logs

use std::time::Instant;

/// Log a handler's completion together with the time spent since `started`.
pub fn log_http_traffic(started: Instant, message: &str) {
    let elapsed = started.elapsed();
    tracing::info!(
        elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
        "{}",
        message
    );
}
