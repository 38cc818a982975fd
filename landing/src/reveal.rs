//! Trigger-once entrance animations.
//!
//! Markup opts in with the `reveal` class and a `--reveal-delay` custom
//! property. [`RevealObserver`] adds `visible` the first time each element
//! scrolls into view; the stylesheet does the rest.

use std::time::Duration;

use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{LandingError, Result};

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";
const THRESHOLD: f64 = 0.15;

/// Delay before the first child of a group appears.
pub const GROUP_DELAY: Duration = Duration::from_millis(300);
/// Gap between siblings of a group.
pub const GROUP_STAGGER: Duration = Duration::from_millis(200);
/// Gap between chips in a tag list.
pub const CHIP_STAGGER: Duration = Duration::from_millis(50);
/// Gap between header navigation items.
pub const NAV_STAGGER: Duration = Duration::from_millis(100);

/// Delay of the `index`-th child in a staggered group.
pub fn stagger_delay(index: usize, delay_children: Duration, stagger_children: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    delay_children + stagger_children.saturating_mul(index)
}

/// Inline style carrying the reveal delay.
pub fn reveal_style(delay: Duration) -> String {
    format!("--reveal-delay: {}ms", delay.as_millis())
}

/// Style for the `index`-th child of a default staggered group.
pub fn group_style(index: usize) -> String {
    reveal_style(stagger_delay(index, GROUP_DELAY, GROUP_STAGGER))
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn reveal_targets(document: &Document) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(&format!(".{REVEAL_CLASS}"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn mark_visible(element: &Element) {
    if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
        tracing::debug!("cannot mark element visible: {}", LandingError::from(err));
    }
}

/// Show every reveal target immediately. Used when the observer cannot be
/// armed so content is never left hidden.
pub fn reveal_all(document: &Document) -> Result<usize> {
    let targets = reveal_targets(document)?;
    targets.iter().for_each(mark_visible);
    Ok(targets.len())
}

fn observe_reveals(document: &Document) -> Result<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    mark_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let targets = reveal_targets(document)?;
    for element in &targets {
        observer.observe(element);
    }
    tracing::debug!(observed = targets.len(), "reveal observer armed");

    Ok((observer, callback))
}

fn page_document() -> Result<Document> {
    web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)
}

/// Arms the reveal observer once the page content is mounted.
///
/// Must be rendered after the sections it animates. If the observer cannot
/// be created every target is shown at once.
#[component]
#[allow(clippy::unused_unit)]
pub fn RevealObserver() -> impl IntoView {
    Effect::new(move || {
        let document = match page_document() {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!("entrance animations disabled: {}", err);
                return;
            }
        };
        match observe_reveals(&document) {
            Ok(armed) => {
                let armed = StoredValue::new_local(armed);
                on_cleanup(move || {
                    let _ = armed.try_with_value(|(observer, _)| observer.disconnect());
                });
            }
            Err(err) => {
                tracing::warn!("entrance animations disabled: {}", err);
                match reveal_all(&document) {
                    Ok(shown) => tracing::info!(shown, "reveal targets shown without animation"),
                    Err(err) => tracing::warn!("cannot show reveal targets: {}", err),
                }
            }
        }
    });

    view! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_child_waits_for_group_delay() {
        assert_eq!(stagger_delay(0, GROUP_DELAY, GROUP_STAGGER), Duration::from_millis(300));
    }

    #[test]
    fn children_are_staggered() {
        assert_eq!(stagger_delay(3, GROUP_DELAY, GROUP_STAGGER), Duration::from_millis(900));
        assert_eq!(stagger_delay(4, Duration::ZERO, CHIP_STAGGER), Duration::from_millis(200));
    }

    #[test]
    fn style_is_in_milliseconds() {
        assert_eq!(reveal_style(Duration::from_millis(450)), "--reveal-delay: 450ms");
        assert_eq!(group_style(1), "--reveal-delay: 500ms");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::testing::append;

    #[wasm_bindgen_test]
    fn reveal_all_shows_every_target() {
        let targets = [append("div", REVEAL_CLASS), append("p", REVEAL_CLASS)];
        let bystander = append("div", "card");
        let document = bystander.owner_document().unwrap();

        assert!(reveal_all(&document).unwrap() >= targets.len());
        for target in &targets {
            assert!(target.class_list().contains(VISIBLE_CLASS));
        }
        assert!(!bystander.class_list().contains(VISIBLE_CLASS));

        for element in targets.iter().chain([&bystander]) {
            element.remove();
        }
    }
}
