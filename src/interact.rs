use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// One interactive element on the page, as bound by the upstream scanner.
///
/// The fill engine drives fields exclusively through these verbs, so any
/// backend that can set values, click, and answer the state probes can
/// host it. Every verb surfaces transport failures as `Err`; "not in the
/// desired state" answers are ordinary `Ok` values.
#[async_trait]
pub trait Interactive: Debug + Send + Sync {
    /// Set the element's textual value and raise a bubbling input
    /// notification so page-level listeners observe the update.
    async fn set_value(&self, value: &str) -> Result<()>;

    /// Dispatch a bubbling click on the element.
    async fn click(&self) -> Result<()>;

    /// The element's text content.
    async fn text(&self) -> Result<String>;

    /// Whether the element currently advertises an expanded popup.
    async fn is_expanded(&self) -> Result<bool> {
        Ok(false)
    }

    /// Whether the element is currently checked or selected.
    async fn is_checked(&self) -> Result<bool> {
        Ok(false)
    }

    /// Checked-state probe for grid cells, which nest their toggle
    /// indicator one level below the clickable cell.
    async fn has_checked_marker(&self) -> Result<bool> {
        self.is_checked().await
    }

    /// Live option handles of the element's popup, in document order.
    /// Only meaningful after the popup has been opened.
    async fn popup_options(&self) -> Result<Vec<Handle>> {
        Ok(Vec::new())
    }
}

/// Shared handle to one interactive element.
pub type Handle = Arc<dyn Interactive>;
