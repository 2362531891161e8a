//! Wall-clock time in milliseconds since the Unix epoch.

/// Current time; `Date.now()` in the browser, the system clock elsewhere.
#[allow(clippy::cast_precision_loss)]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}
