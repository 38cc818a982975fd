//! [`Viewport`] backed by the real browser window.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::{LandingError, Result};
use crate::scroll::Viewport;
use crate::section::SectionId;

/// Live window geometry. Cheap to build per event.
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        Ok(Self { window })
    }

    fn element_top(&self, id: &str) -> Result<f64> {
        let document = self.window.document().ok_or(LandingError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| LandingError::MissingElement { id: id.to_string() })?;
        let element: HtmlElement = element
            .dyn_into()
            .map_err(|_| LandingError::Js(format!("#{id} is not an HTML element")))?;
        Ok(f64::from(element.offset_top()))
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_else(|err| {
            tracing::warn!("scrollY unavailable: {}", LandingError::from(err));
            0.0
        })
    }

    fn section_top(&self, section: SectionId) -> Option<f64> {
        match self.element_top(section.as_str()) {
            Ok(top) => Some(top),
            Err(err) => {
                tracing::debug!("{}", err);
                None
            }
        }
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Current `scrollY`, or 0 outside a browser.
pub fn current_scroll_y() -> f64 {
    BrowserViewport::new()
        .map(|viewport| viewport.scroll_y())
        .unwrap_or_default()
}
