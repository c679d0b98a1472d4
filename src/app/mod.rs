//! Command-line application support.
//!
//! Input reading, result rendering, and end-of-run statistics used by the
//! `seo_report` binary.

pub mod input;
pub mod output;
pub mod statistics;

pub use input::{collect_urls, parse_url_lines};
pub use output::{render_outcome, RunSummary};
pub use statistics::print_error_statistics;
