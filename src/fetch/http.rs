//! Static HTTP fetching.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

use super::{FetchedPage, PageSource, RequestHeaders};
use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{
    fetch_error_from_reqwest, update_fetch_error_stats, AnalysisError, FetchError,
    FetchErrorKind, InfoType, ProcessingStats,
};

/// Fetches raw markup with one GET request.
///
/// Redirects, timeout, and user agent come from the shared client (see
/// `initialization::init_client`).
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    stats: Arc<ProcessingStats>,
}

impl HttpFetcher {
    pub fn new(client: Arc<reqwest::Client>, stats: Arc<ProcessingStats>) -> Self {
        Self { client, stats }
    }

    async fn get(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        debug!(
            "Sending GET request to {url} with headers {:?}",
            RequestHeaders::as_vec()
        );
        let request = RequestHeaders::apply_to_request_builder(self.client.get(url.clone()));
        let response = request
            .send()
            .await
            .map_err(|e| fetch_error_from_reqwest(&e))?;

        let status = response.status();
        let final_url = response.url().clone();
        if final_url != *url {
            debug!("Redirected from {url} to {final_url}");
            self.stats.increment_info(InfoType::HttpRedirect);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error_from_reqwest(&e))?;

        if !status.is_success() {
            if bytes.is_empty() {
                return Err(FetchError::new(
                    FetchErrorKind::Status(status.as_u16()),
                    format!("{final_url} returned {status} with an empty body"),
                ));
            }
            debug!("Analyzing {status} response body from {final_url}");
            self.stats.increment_info(InfoType::NonSuccessStatus);
        }

        let body = if bytes.len() > MAX_RESPONSE_BODY_SIZE {
            debug!(
                "Truncating {} byte body from {final_url} to {MAX_RESPONSE_BODY_SIZE} bytes",
                bytes.len()
            );
            self.stats.increment_info(InfoType::TruncatedBody);
            String::from_utf8_lossy(&bytes[..MAX_RESPONSE_BODY_SIZE]).into_owned()
        } else {
            String::from_utf8_lossy(&bytes).into_owned()
        };

        Ok(FetchedPage {
            requested_url: url.clone(),
            final_url,
            status: status.as_u16(),
            body,
            load_time_ms: None,
            probe: None,
        })
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, AnalysisError> {
        self.get(url).await.map_err(|e| {
            update_fetch_error_stats(&self.stats, &e);
            AnalysisError::Fetch(e)
        })
    }
}
