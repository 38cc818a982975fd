//! Error types for the browser glue.
//!
//! None of these reach the visitor. The controller boundary turns them into
//! no-ops and a `tracing` event.

use wasm_bindgen::JsValue;

/// Failures while talking to the DOM or reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// `window` is not available (non-browser host).
    #[error("no global window")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// No rendered element carries the requested `id`.
    #[error("element #{id} not found")]
    MissingElement {
        /// The anchor that was looked up.
        id: String,
    },

    /// A DOM call threw.
    #[error("js error: {0}")]
    Js(String),

    /// The inline site configuration block is not valid JSON for `SiteConfig`.
    #[error("site config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        LandingError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_anchor() {
        let err = LandingError::MissingElement {
            id: "journey".into(),
        };
        assert_eq!(err.to_string(), "element #journey not found");
    }

    #[test]
    fn config_error_wraps_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = LandingError::from(parse);
        assert!(err.to_string().starts_with("site config error:"));
    }
}
