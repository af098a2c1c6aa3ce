//! Wall-clock and timer helpers.
//!
//! Browser builds use `js_sys::Date` and `gloo-timers`; host builds read the
//! UTC clock through `time` and skip artificial delays so tests run instantly.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::time::Duration;

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}

/// Local calendar parts used by the home page: `(hour, day, month)` with a
/// zero-based month.
pub fn local_date_parts() -> (u32, u32, u32) {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        (now.get_hours(), now.get_date(), now.get_month())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // UTC; the guarded pages only render real content after hydration.
        date_parts(time::OffsetDateTime::now_utc())
    }
}

#[cfg(not(feature = "hydrate"))]
fn date_parts(now: time::OffsetDateTime) -> (u32, u32, u32) {
    (u32::from(now.hour()), u32::from(now.day()), u32::from(u8::from(now.month())) - 1)
}

/// Wait for `duration` in the browser; returns immediately elsewhere.
#[allow(clippy::unused_async)]
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
