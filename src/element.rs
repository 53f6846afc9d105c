use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chromiumoxide::page::Page as CrPage;
use tracing::trace;

use crate::error::{Error, Result};
use crate::interact::{Handle, Interactive};

/// An interactive element addressed by CSS selector on a live page.
///
/// The element is re-resolved on every verb, so handles stay valid across
/// page re-renders as long as the selector still matches. A selector that
/// no longer matches surfaces as `Error::ElementNotFound`.
pub struct CdpElement {
    page: CrPage,
    selector: String,
    index: usize,
    popup_selector: Option<String>,
}

impl CdpElement {
    pub fn new(page: CrPage, selector: impl Into<String>) -> Self {
        Self {
            page,
            selector: selector.into(),
            index: 0,
            popup_selector: None,
        }
    }

    /// Address the n-th match of the selector instead of the first.
    pub fn nth(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Selector under which the element's popup options are re-queried
    /// after an open action. Defaults to descendant `div[role=option]`.
    pub fn popup_selector(mut self, selector: impl Into<String>) -> Self {
        self.popup_selector = Some(selector.into());
        self
    }

    pub fn into_handle(self) -> Handle {
        Arc::new(self)
    }

    fn describe(&self) -> String {
        if self.index == 0 {
            self.selector.clone()
        } else {
            format!("{} (match {})", self.selector, self.index)
        }
    }

    /// Wrap a verb body in an IIFE that resolves this element first and
    /// yields `null` when the selector no longer matches.
    fn wrap(&self, body: &str) -> Result<String> {
        let selector_js =
            serde_json::to_string(&self.selector).map_err(|e| Error::JsError(e.to_string()))?;
        Ok(format!(
            r#"
            (() => {{
                const el = document.querySelectorAll({selector_js})[{index}];
                if (!el) return null;
                {body}
            }})()
            "#,
            index = self.index,
        ))
    }

    async fn eval<T: serde::de::DeserializeOwned>(&self, js: String) -> Result<T> {
        let result = self
            .page
            .evaluate(js)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        result
            .into_value()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Run a verb body against this element; `None` from the wrapper
    /// means the element is gone from the page.
    async fn run<T: serde::de::DeserializeOwned>(&self, body: &str) -> Result<T> {
        let js = self.wrap(body)?;
        let value: Option<T> = self.eval(js).await?;
        value.ok_or_else(|| Error::ElementNotFound(self.describe()))
    }
}

#[async_trait]
impl Interactive for CdpElement {
    async fn set_value(&self, value: &str) -> Result<()> {
        trace!("Setting value on {}", self.describe());
        let value_js =
            serde_json::to_string(value).map_err(|e| Error::JsError(e.to_string()))?;
        let body = format!(
            r#"
                el.value = {value_js};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                return true;
            "#
        );
        self.run::<bool>(&body).await?;
        Ok(())
    }

    async fn click(&self) -> Result<()> {
        trace!("Clicking {}", self.describe());
        let body = r#"
                el.dispatchEvent(new Event('click', { bubbles: true }));
                return true;
            "#;
        self.run::<bool>(body).await?;
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        self.run("return el.textContent || '';").await
    }

    async fn is_expanded(&self) -> Result<bool> {
        self.run("return el.getAttribute('aria-expanded') === 'true';")
            .await
    }

    async fn is_checked(&self) -> Result<bool> {
        self.run("return el.getAttribute('aria-checked') === 'true';")
            .await
    }

    async fn has_checked_marker(&self) -> Result<bool> {
        self.run("return !!el.querySelector('div[role=checkbox][aria-checked=true]');")
            .await
    }

    async fn popup_options(&self) -> Result<Vec<Handle>> {
        let popup = match &self.popup_selector {
            Some(popup) => popup.clone(),
            None => format!("{} div[role=option]", self.selector),
        };
        let popup_js =
            serde_json::to_string(&popup).map_err(|e| Error::JsError(e.to_string()))?;
        let count: usize = self
            .eval(format!("document.querySelectorAll({popup_js}).length"))
            .await?;
        trace!("Popup {:?} holds {} options", popup, count);

        Ok((0..count)
            .map(|index| {
                CdpElement::new(self.page.clone(), popup.clone())
                    .nth(index)
                    .into_handle()
            })
            .collect())
    }
}

impl fmt::Debug for CdpElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdpElement")
            .field("selector", &self.selector)
            .field("index", &self.index)
            .field("popup_selector", &self.popup_selector)
            .finish()
    }
}
