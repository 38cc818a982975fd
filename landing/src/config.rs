//! Site configuration.
//!
//! Defaults are compiled in. The host page can override any field with an
//! inline JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!     { "loading_delay_ms": 1200, "log_level": "debug" }
//! </script>
//! ```

use std::time::Duration;

use leptos::prelude::*;
use serde::Deserialize;

use crate::error::{LandingError, Result};

/// Version string used across the page (single source of truth)
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Brand name shown in the header, splash and footer.
pub const BRAND: &str = "CloudNex";

/// `id` of the inline configuration block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed header; navigation lands this far above a section.
    pub header_offset: f64,
    /// Margin added to `scrollY` before resolving the active section.
    pub scroll_lookahead: f64,
    /// `scrollY` past which the header switches to its opaque style.
    pub scrolled_threshold: f64,
    /// How long the loading splash stays up after mount.
    pub loading_delay_ms: u64,
    /// Max tracing level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scroll_lookahead: 100.0,
            scrolled_threshold: 20.0,
            loading_delay_ms: 2000,
            log_level: "info".into(),
            contact_email: "hello@cloudnex.dev".into(),
        }
    }
}

impl SiteConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the inline `#site-config` block from the host page.
    ///
    /// An absent block means defaults.
    pub fn from_document() -> Result<Self> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let document = window.document().ok_or(LandingError::NoDocument)?;
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => Self::from_json(&element.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }
}

/// Config provided by the root component, or defaults outside of it.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_layout_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.scroll_lookahead, 100.0);
        assert_eq!(config.scrolled_threshold, 20.0);
        assert_eq!(config.loading_delay(), Duration::from_secs(2));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "loading_delay_ms": 500 }"#).unwrap();
        assert_eq!(
            config,
            SiteConfig {
                loading_delay_ms: 500,
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn blank_block_is_default() {
        assert_eq!(SiteConfig::from_json("  \n ").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ loading_delay_ms: }").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn version_is_prefixed() {
        assert!(VERSION.starts_with('v'));
    }
}
