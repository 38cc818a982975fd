use leptos::prelude::*;

use crate::config::{BRAND, VERSION};
use crate::section::SectionId;

/// In-page shortcuts. They go through navigation so the header offset and
/// active marker apply.
const QUICK_LINKS: &[SectionId] = &[SectionId::Blog, SectionId::Contact];

#[component]
pub fn Footer(
    /// Scrolls to a section and marks it active.
    on_navigate: Callback<SectionId>,
) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"⚡"</span>
                    <span class="footer-title">{BRAND}</span>
                    <span class="footer-version">{VERSION}</span>
                </div>
                <div class="footer-links">
                    <a href="https://github.com/cloudnex" target="_blank" class="footer-link">"GitHub"</a>
                    <a href="https://www.linkedin.com/company/cloudnex" target="_blank" class="footer-link">"LinkedIn"</a>
                    {QUICK_LINKS
                        .iter()
                        .map(|&section| {
                            view! {
                                <button
                                    class="footer-link"
                                    data-section=section.as_str()
                                    on:click=move |_| on_navigate.run(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="footer-copyright">
                    "© 2025 " {BRAND} " · Built with Rust + Leptos"
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_use_nav_labels() {
        let labels: Vec<_> = QUICK_LINKS.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Insights", "Contact"]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::HtmlElement;

    use super::*;
    use crate::testing::body;

    #[wasm_bindgen_test]
    fn quick_link_navigates_instead_of_jumping() {
        let requested = RwSignal::new(None);
        let on_navigate = Callback::new(move |section| requested.set(Some(section)));
        let handle = mount_to(body(), move || view! { <Footer on_navigate=on_navigate /> });

        let link: HtmlElement = body()
            .query_selector(".footer-link[data-section=contact]")
            .unwrap()
            .unwrap()
            .unchecked_into();
        link.click();
        assert_eq!(requested.get_untracked(), Some(SectionId::Contact));

        drop(handle);
    }
}
