//! Root controller: owns the active section and the loading splash.

use leptos::ev;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::loading::{LoadingSplash, use_loading_splash};
use crate::reveal::RevealObserver;
use crate::scroll::{active_section_in, navigate};
use crate::section::SectionId;
use crate::sections::*;
use crate::viewport::BrowserViewport;

/// Wire `active` to navigation requests and to the window scroll position.
///
/// Returns the navigate handle for header and hero. The scroll listener is
/// removed when the current owner is cleaned up.
pub fn use_section_tracking(
    active: RwSignal<SectionId>,
    header_offset: f64,
    lookahead: f64,
) -> Callback<SectionId> {
    let on_navigate = Callback::new(move |section: SectionId| {
        let next = match BrowserViewport::new() {
            Ok(viewport) => navigate(&viewport, section, header_offset),
            Err(err) => {
                tracing::debug!("navigate without viewport: {}", err);
                section
            }
        };
        active.set(next);
    });

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let Ok(viewport) = BrowserViewport::new() else {
            return;
        };
        let current = active.get_untracked();
        let next = active_section_in(&viewport, lookahead, current);
        if next != current {
            tracing::debug!(from = %current, to = %next, "active section");
            active.set(next);
        }
    });
    on_cleanup(move || scroll_listener.remove());

    on_navigate
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let header_offset = config.header_offset;
    let lookahead = config.scroll_lookahead;
    let loading = use_loading_splash(config.loading_delay());
    provide_context(config);

    let active = RwSignal::new(SectionId::Home);
    let on_navigate = use_section_tracking(active, header_offset, lookahead);

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSplash /> }>
            <div class="page">
                <Header active=active.read_only() on_navigate=on_navigate />
                <main>
                    <Hero on_navigate=on_navigate />
                    <About />
                    <Journey />
                    <Projects />
                    <AiStack />
                    <Architecture />
                    <Services />
                    <Blog />
                    <Contact />
                </main>
                <Footer on_navigate=on_navigate />
                <RevealObserver />
            </div>
        </Show>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use leptos::mount::mount_to;
    use leptos::reactive::owner::Owner;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{Event, HtmlElement};

    use super::*;
    use crate::testing::{append, body, sleep};

    fn add_anchor(id: &str) -> HtmlElement {
        let anchor = append("div", "");
        anchor.set_id(id);
        anchor.set_attribute("style", "position: absolute; top: 0").unwrap();
        anchor
    }

    fn fire_scroll() {
        let event = Event::new("scroll").unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn navigate_marks_section_active() {
        let owner = Owner::new();
        let active = owner.with(|| RwSignal::new(SectionId::Home));
        let on_navigate = owner.with(|| use_section_tracking(active, 80.0, 100.0));

        on_navigate.run(SectionId::Services);
        assert_eq!(active.get_untracked(), SectionId::Services);

        on_navigate.run(SectionId::Home);
        assert_eq!(active.get_untracked(), SectionId::Home);
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn scroll_listener_is_removed_on_cleanup() {
        let anchor = add_anchor("about");
        let root = Owner::new();
        let active = root.with(|| RwSignal::new(SectionId::Journey));
        let child = root.child();
        child.with(|| use_section_tracking(active, 80.0, 100.0));

        fire_scroll();
        assert_eq!(active.get_untracked(), SectionId::About);

        child.cleanup();
        active.set(SectionId::Journey);
        fire_scroll();
        assert_eq!(active.get_untracked(), SectionId::Journey);

        anchor.remove();
        root.cleanup();
    }

    #[wasm_bindgen_test]
    async fn app_swaps_splash_for_content() {
        let config = SiteConfig {
            loading_delay_ms: 20,
            ..SiteConfig::default()
        };
        let handle = mount_to(body(), move || view! { <App config=config /> });

        assert!(body().query_selector(".splash").unwrap().is_some());
        assert!(body().query_selector("#about").unwrap().is_none());

        sleep(80).await;
        assert!(body().query_selector(".splash").unwrap().is_none());
        assert!(body().query_selector("#about").unwrap().is_some());

        drop(handle);
        assert!(body().query_selector("#about").unwrap().is_none());
    }
}
