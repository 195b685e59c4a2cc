//! Platform-specific timer shim.
//!
//! The demo's only "asynchrony" is waiting out a fixed delay before a
//! resolution lands. Web and desktop spell that differently, and this is the
//! single place that knows which spelling applies:
//!
//! - **Desktop**: `tokio::time::sleep` on the runtime the renderer drives
//! - **Web**: `gloo-timers` wrapping `setTimeout`

/// Suspend the current task for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Suspend the current task for `ms` milliseconds.
///
/// Web version: drives a `setTimeout` future.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn sleep_waits_at_least_the_requested_time() {
        let start = Instant::now();
        sleep_ms(25).await;
        assert!(start.elapsed().as_millis() >= 25);
    }

    #[tokio::test]
    async fn zero_sleep_completes() {
        sleep_ms(0).await;
    }
}
