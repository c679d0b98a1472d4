//! Application initialization.
//!
//! Shared resources are built once and handed to the analyzer:
//! - Logger (`env_logger`, plain or JSON)
//! - HTTP client for static fetches
//! - Concurrency semaphore for batch runs

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore limiting concurrent analyses. A zero count is raised to one.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}
