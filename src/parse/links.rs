//! Internal/external link classification.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::error_handling::{ProcessingStats, WarningType};
use crate::models::LinkCounts;
use crate::utils::parse_selector_unsafe;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));

/// True for hrefs that don't navigate anywhere: empty, `javascript:`, or a bare `#`.
fn is_skipped_href(href: &str) -> bool {
    href.is_empty()
        || href == "#"
        || href
            .get(..11)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

/// Counts internal and external links.
///
/// Relative hrefs are resolved against `page_url`; a link is internal iff its
/// resolved host equals the page host. Hrefs that don't resolve are ignored.
pub fn count_links(document: &Html, page_url: &Url, stats: &ProcessingStats) -> LinkCounts {
    let page_host = page_url.host_str();
    let mut counts = LinkCounts::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let href = element.value().attr("href").unwrap_or_default().trim();
        if is_skipped_href(href) {
            continue;
        }
        match page_url.join(href) {
            Ok(resolved) if resolved.host_str() == page_host => counts.internal += 1,
            Ok(_) => counts.external += 1,
            Err(e) => {
                log::debug!("Ignoring unresolvable link '{href}': {e}");
                stats.increment_warning(WarningType::UnresolvableLink);
            }
        }
    }
    counts
}
