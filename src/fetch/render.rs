//! Headless rendering through Chromium.
//!
//! The browser is launched (or connected to) once and shared by every
//! request; each request gets its own page on a mobile viewport which is
//! closed again on every exit path.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::emulation::{
    SetDeviceMetricsOverrideParams, SetTouchEmulationEnabledParams,
};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use url::Url;

use super::probe::PROBE_SCRIPT;
use super::{FetchedPage, PageSource, RenderProbe};
use crate::config::{
    Config, MOBILE_DEVICE_SCALE_FACTOR, MOBILE_USER_AGENT, MOBILE_VIEWPORT_HEIGHT,
    MOBILE_VIEWPORT_WIDTH, NETWORK_SETTLE_POLL, NETWORK_SETTLE_QUIET,
};
use crate::error_handling::{
    update_render_error_stats, AnalysisError, InitializationError, ProcessingStats, RenderError,
    RenderErrorKind, WarningType,
};
use crate::utils::duration_to_ms;

const RESOURCE_COUNT_SCRIPT: &str = "performance.getEntriesByType('resource').length";

/// Status of the main document from Navigation Timing; 0 when unavailable.
const STATUS_SCRIPT: &str = r#"(() => {
    const entry = performance.getEntriesByType('navigation')[0];
    return entry && entry.responseStatus ? entry.responseStatus : 0;
})()"#;

/// A shared headless browser that renders pages on a mobile viewport.
pub struct BrowserRenderer {
    browser: Browser,
    handler: JoinHandle<()>,
    render_timeout: Duration,
    stats: Arc<ProcessingStats>,
}

impl BrowserRenderer {
    /// Launches Chromium, or connects to `config.chrome_url` when set.
    pub async fn launch(
        config: &Config,
        stats: Arc<ProcessingStats>,
    ) -> Result<Self, InitializationError> {
        let render_timeout = Duration::from_secs(config.render_timeout_seconds);
        let (browser, mut handler) = match &config.chrome_url {
            Some(url) => {
                info!("Connecting to remote Chrome instance at {url}");
                Browser::connect(url.as_str()).await.map_err(|e| {
                    InitializationError::BrowserError(format!(
                        "failed to connect to {url}: {e}"
                    ))
                })?
            }
            None => {
                let browser_config = BrowserConfig::builder()
                    .no_sandbox()
                    .request_timeout(render_timeout)
                    .arg("--disable-gpu")
                    .arg("--disable-dev-shm-usage")
                    .build()
                    .map_err(InitializationError::BrowserError)?;
                Browser::launch(browser_config)
                    .await
                    .map_err(|e| InitializationError::BrowserError(e.to_string()))?
            }
        };

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler stopped: {e}");
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            render_timeout,
            stats,
        })
    }

    /// Closes the browser and waits for its event loop to finish.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Browser process wait failed: {e}");
        }
        if let Err(e) = self.handler.await {
            debug!("Browser handler task ended abnormally: {e}");
        }
    }

    async fn render(&self, url: &Url) -> Result<FetchedPage, RenderError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::new(RenderErrorKind::Launch, e.to_string()))?;

        let outcome = tokio::time::timeout(self.render_timeout, self.capture(&page, url)).await;

        if let Err(e) = page.close().await {
            debug!("Failed to close page for {url}: {e}");
        }

        outcome.unwrap_or_else(|_| {
            Err(RenderError::new(
                RenderErrorKind::Timeout,
                format!(
                    "{url} did not finish rendering within {}s",
                    self.render_timeout.as_secs()
                ),
            ))
        })
    }

    async fn capture(&self, page: &Page, url: &Url) -> Result<FetchedPage, RenderError> {
        apply_mobile_viewport(page).await?;

        let started = Instant::now();
        page.goto(url.as_str())
            .await
            .map_err(|e| RenderError::new(RenderErrorKind::Navigation, e.to_string()))?;
        wait_for_network_settle(page).await?;
        let load_time_ms = duration_to_ms(started.elapsed());
        debug!("{url} settled after {load_time_ms}ms");

        let status: u16 = evaluate(page, STATUS_SCRIPT).await?;

        let probe = match evaluate::<RenderProbe>(page, PROBE_SCRIPT).await {
            Ok(probe) => Some(probe),
            Err(e) => {
                debug!("Layout probe failed for {url}: {e}");
                self.stats.increment_warning(WarningType::MissingRenderProbe);
                None
            }
        };

        let body = page
            .content()
            .await
            .map_err(|e| RenderError::new(RenderErrorKind::Snapshot, e.to_string()))?;

        let final_url = page
            .url()
            .await
            .ok()
            .flatten()
            .and_then(|u| Url::parse(&u).ok())
            .unwrap_or_else(|| url.clone());

        Ok(FetchedPage {
            requested_url: url.clone(),
            final_url,
            status,
            body,
            load_time_ms: Some(load_time_ms),
            probe,
        })
    }
}

#[async_trait]
impl PageSource for BrowserRenderer {
    async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, AnalysisError> {
        self.render(url).await.map_err(|e| {
            update_render_error_stats(&self.stats, &e);
            AnalysisError::Render(e)
        })
    }
}

async fn apply_mobile_viewport(page: &Page) -> Result<(), RenderError> {
    let launch_error = |e: chromiumoxide::error::CdpError| {
        RenderError::new(RenderErrorKind::Launch, format!("viewport setup failed: {e}"))
    };
    page.execute(SetDeviceMetricsOverrideParams::new(
        MOBILE_VIEWPORT_WIDTH,
        MOBILE_VIEWPORT_HEIGHT,
        MOBILE_DEVICE_SCALE_FACTOR,
        true,
    ))
    .await
    .map_err(launch_error)?;
    page.execute(SetTouchEmulationEnabledParams::new(true))
        .await
        .map_err(launch_error)?;
    page.set_user_agent(MOBILE_USER_AGENT)
        .await
        .map_err(launch_error)?;
    Ok(())
}

/// Waits until the number of loaded resources stops changing for
/// `NETWORK_SETTLE_QUIET`. The caller's timeout bounds the wait.
async fn wait_for_network_settle(page: &Page) -> Result<(), RenderError> {
    let mut last_count: u64 = evaluate(page, RESOURCE_COUNT_SCRIPT).await?;
    let mut quiet_since = Instant::now();
    loop {
        tokio::time::sleep(NETWORK_SETTLE_POLL).await;
        let count: u64 = evaluate(page, RESOURCE_COUNT_SCRIPT).await?;
        if count != last_count {
            last_count = count;
            quiet_since = Instant::now();
        } else if quiet_since.elapsed() >= NETWORK_SETTLE_QUIET {
            return Ok(());
        }
    }
}

async fn evaluate<T: serde::de::DeserializeOwned>(
    page: &Page,
    script: &str,
) -> Result<T, RenderError> {
    page.evaluate(script)
        .await
        .map_err(|e| RenderError::new(RenderErrorKind::Evaluation, e.to_string()))?
        .into_value::<T>()
        .map_err(|e| RenderError::new(RenderErrorKind::Evaluation, e.to_string()))
}
