//! Monotonic time for the search debouncer.

use std::time::Duration;

/// Time since page load, from `performance.now()`.
pub fn now() -> Duration {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| Duration::from_secs_f64(performance.now().max(0.0) / 1000.0))
        .unwrap_or_default()
}
