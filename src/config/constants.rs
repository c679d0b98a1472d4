//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including timeouts, size limits, the mobile viewport used for rendering, and the
//! thresholds of the scoring tables.

use std::time::Duration;

/// Maximum URLs analyzed concurrently by the CLI
pub const SEMAPHORE_LIMIT: usize = 4;

/// Default HTTP fetch timeout in seconds (static mode)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default headless render timeout in seconds (rendered mode)
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 30;
/// How long the resource count must stay unchanged before the network is considered settled
pub const NETWORK_SETTLE_QUIET: Duration = Duration::from_millis(500);
/// Poll interval while waiting for the network to settle
pub const NETWORK_SETTLE_POLL: Duration = Duration::from_millis(100);

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// User-Agent used by the renderer once the mobile viewport is applied
pub const MOBILE_USER_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

// Mobile viewport applied in rendered mode
pub const MOBILE_VIEWPORT_WIDTH: i64 = 375;
pub const MOBILE_VIEWPORT_HEIGHT: i64 = 812;
pub const MOBILE_DEVICE_SCALE_FACTOR: f64 = 2.0;
/// A page "fits" the viewport if its scroll width is at most this multiple of the viewport width
pub const MOBILE_OVERFLOW_TOLERANCE: f64 = 1.1;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger bodies are truncated before parsing
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

// Recommendation list shaping
/// Maximum number of recommendations returned for one analysis
pub const MAX_RECOMMENDATIONS: usize = 10;
/// Generic tips are appended when fewer feature-derived recommendations than this fired
pub const MIN_FEATURE_RECOMMENDATIONS: usize = 5;
/// Number of leading recommendations turned into priority fixes
pub const PRIORITY_FIX_COUNT: usize = 5;

// Scoring thresholds
/// Load time (ms) above which a speed recommendation is emitted
pub const SLOW_LOAD_TIME_MS: u64 = 3000;
/// Fixed category score used when the page could not be analyzed
pub const DEGRADED_CATEGORY_SCORE: u8 = 50;
/// Meta score assumed by URL-only analysis (metadata is not observable)
pub const URL_ONLY_META_SCORE: u8 = 60;
/// Content score assumed by URL-only analysis (content is not observable)
pub const URL_ONLY_CONTENT_SCORE: u8 = 50;
/// Accessibility score assumed by URL-only analysis
pub const URL_ONLY_ACCESSIBILITY_SCORE: u8 = 70;
