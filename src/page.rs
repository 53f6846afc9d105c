use std::time::Duration;

use chromiumoxide::page::Page as CrPage;

use crate::element::CdpElement;
use crate::error::{Error, Result};
use crate::interact::Handle;

/// Wrapper around a chromiumoxide Page with the surface the fill flows
/// need: navigation, readiness polling, and handle binding.
pub struct Page {
    inner: CrPage,
    default_timeout: Duration,
}

impl Page {
    pub(crate) fn new(inner: CrPage, default_timeout: Duration) -> Self {
        Self {
            inner,
            default_timeout,
        }
    }

    /// Returns a reference to the underlying chromiumoxide Page.
    pub fn inner(&self) -> &CrPage {
        &self.inner
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Navigate to the given URL and wait for the page to load.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;
        Ok(())
    }

    /// Get the current page URL.
    pub async fn url(&self) -> Result<String> {
        self.inner
            .url()
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?
            .ok_or_else(|| Error::NavigationError("No URL found".into()))
    }

    /// Get the current page title.
    pub async fn title(&self) -> Result<String> {
        let result = self
            .inner
            .evaluate("document.title")
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        match result.into_value::<String>() {
            Ok(title) => Ok(title),
            Err(_) => Ok(String::new()),
        }
    }

    /// Wait for a navigation to complete.
    pub async fn wait_for_navigation(&self) -> Result<()> {
        self.inner
            .wait_for_navigation()
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;
        Ok(())
    }

    // ── Handles ─────────────────────────────────────────────────────

    /// Bind a CSS selector to an interactive element on this page.
    /// Binding is lazy; the selector resolves when a verb runs.
    pub fn element(&self, selector: &str) -> CdpElement {
        CdpElement::new(self.inner.clone(), selector)
    }

    /// Bind a CSS selector and share it as an engine handle.
    pub fn handle(&self, selector: &str) -> Handle {
        self.element(selector).into_handle()
    }

    /// Whether any element currently matches the given CSS selector.
    pub async fn exists(&self, selector: &str) -> Result<bool> {
        let selector_js =
            serde_json::to_string(selector).map_err(|e| Error::JsError(e.to_string()))?;
        let result = self
            .inner
            .evaluate(format!("!!document.querySelector({selector_js})"))
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        result
            .into_value()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Wait for an element matching the given CSS selector to appear in
    /// the DOM. Polls every 100ms up to the configured default timeout.
    pub async fn wait_for_selector(&self, selector: &str) -> Result<CdpElement> {
        let timeout = self.default_timeout;
        let interval = Duration::from_millis(100);
        let start = std::time::Instant::now();

        loop {
            match self.exists(selector).await {
                Ok(true) => return Ok(self.element(selector)),
                Ok(false) | Err(_) if start.elapsed() < timeout => {
                    tokio::time::sleep(interval).await;
                }
                Ok(false) => {
                    return Err(Error::Timeout(format!(
                        "Timed out waiting for selector: {}",
                        selector
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }

    // ── Observations ────────────────────────────────────────────────

    /// Evaluate a JavaScript expression and return the result as a string.
    pub async fn evaluate(&self, expression: &str) -> Result<String> {
        let result = self
            .inner
            .evaluate(expression)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        match result.value() {
            Some(val) => Ok(val.to_string()),
            None => Ok(String::new()),
        }
    }
}
