//! Portfolio links.

use serde::{Deserialize, Serialize};

/// An external portfolio link (blog, dashboard gallery, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioLink {
    /// Display label (e.g. "Medium Blog").
    pub label: String,
    /// Scheme-less URL (e.g. "medium.com/@jane").
    pub url: String,
}

impl PortfolioLink {
    /// Returns the full `https://` URL for use in anchors.
    #[must_use]
    pub fn href(&self) -> String {
        format!("https://{}", self.url)
    }
}
