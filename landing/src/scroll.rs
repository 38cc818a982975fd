//! Scroll position to active section mapping, and navigation.
//!
//! Everything here is independent of the browser. The root component wires
//! [`resolve_active_section`] to the window `scroll` event and [`navigate`]
//! to header/hero clicks, both through a [`Viewport`].

use crate::section::SectionId;

/// Geometry and scrolling, as seen by the navigation controller.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Top offset of the section's anchor element, if it is rendered.
    fn section_top(&self, section: SectionId) -> Option<f64>;

    /// Smooth-scroll the document so that `top` is at the top edge.
    fn scroll_to(&self, top: f64);
}

/// Top offset used for scroll detection. `home` is the document origin and
/// never needs an element.
fn detection_top(section: SectionId, top_of: &impl Fn(SectionId) -> Option<f64>) -> Option<f64> {
    if section.is_home() {
        Some(0.0)
    } else {
        top_of(section)
    }
}

/// Section currently under the header.
///
/// Walks [`SectionId::ALL`] from the bottom up and picks the first section
/// whose top is at or above `scroll_y + lookahead`. Sections with no element
/// are skipped. When nothing qualifies, `current` is kept.
pub fn resolve_active_section(
    scroll_y: f64,
    lookahead: f64,
    current: SectionId,
    top_of: impl Fn(SectionId) -> Option<f64>,
) -> SectionId {
    let position = scroll_y + lookahead;
    SectionId::ALL
        .iter()
        .rev()
        .copied()
        .find(|section| detection_top(*section, &top_of).is_some_and(|top| top <= position))
        .unwrap_or(current)
}

/// Where the document should scroll to show `section` below the header.
///
/// `None` when the section has no rendered element.
pub fn scroll_target(
    section: SectionId,
    header_offset: f64,
    top_of: impl Fn(SectionId) -> Option<f64>,
) -> Option<f64> {
    if section.is_home() {
        return Some(0.0);
    }
    top_of(section).map(|top| top - header_offset)
}

/// Scroll to `section` and return it as the new active section.
///
/// The returned section is the request itself, not the position the scroll
/// ends up at. A missing element makes the scroll a no-op.
pub fn navigate<V: Viewport + ?Sized>(
    viewport: &V,
    section: SectionId,
    header_offset: f64,
) -> SectionId {
    match scroll_target(section, header_offset, |s| viewport.section_top(s)) {
        Some(top) => {
            tracing::debug!(section = %section, top, "navigate");
            viewport.scroll_to(top);
        }
        None => tracing::debug!(section = %section, "navigate: no element, skipping scroll"),
    }
    section
}

/// Active section for the viewport's current position.
pub fn active_section_in<V: Viewport + ?Sized>(
    viewport: &V,
    lookahead: f64,
    current: SectionId,
) -> SectionId {
    resolve_active_section(viewport.scroll_y(), lookahead, current, |s| {
        viewport.section_top(s)
    })
}
