//! Small shared helpers.
//!
//! - CSS selector parsing for the `LazyLock` selector statics
//! - Millisecond conversion for measured durations

mod selector;

use std::time::Duration;

pub use selector::parse_selector_unsafe;

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
