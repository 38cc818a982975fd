use leptos::ev;
use leptos::prelude::*;

use crate::config::{BRAND, use_site_config};
use crate::reveal::{NAV_STAGGER, stagger_delay};
use crate::section::SectionId;
use crate::theme::ThemeToggle;
use crate::viewport::current_scroll_y;

/// Whether the header should switch to its opaque style.
fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

fn nav_link_class(is_active: bool) -> &'static str {
    if is_active { "nav-link active" } else { "nav-link" }
}

/// Drop-in animation delay for the `index`-th navigation link.
fn nav_item_style(index: usize) -> String {
    let delay = stagger_delay(index, std::time::Duration::ZERO, NAV_STAGGER);
    format!("--nav-delay: {}ms", delay.as_millis())
}

#[component]
pub fn Header(
    /// Section highlighted in the navigation.
    #[prop(into)]
    active: Signal<SectionId>,
    /// Scrolls to a section and marks it active.
    on_navigate: Callback<SectionId>,
) -> impl IntoView {
    let threshold = use_site_config().scrolled_threshold;
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(is_scrolled(current_scroll_y(), threshold));

    let listener = window_event_listener(ev::scroll, move |_| {
        let next = is_scrolled(current_scroll_y(), threshold);
        if scrolled.get_untracked() != next {
            set_scrolled.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    let nav_click = move |section: SectionId| {
        on_navigate.run(section);
        set_menu_open.set(false);
    };

    let desktop_links = SectionId::ALL
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            view! {
                <button
                    class=move || nav_link_class(active.get() == section)
                    style=nav_item_style(index)
                    on:click=move |_| nav_click(section)
                >
                    <span class="nav-link-label">{section.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <header class=move || if scrolled.get() { "header scrolled" } else { "header" }>
            <div class="header-inner">
                <button class="header-brand" on:click=move |_| nav_click(SectionId::Home)>
                    <div class="header-logo">"⚡"</div>
                    <div>
                        <span class="header-title">{BRAND}</span>
                        <div class="header-subtitle">"DevOps Solutions"</div>
                    </div>
                </button>

                <nav class="nav-links">{desktop_links}</nav>

                <div class="header-actions">
                    <ThemeToggle />
                    <button class="header-cta" on:click=move |_| nav_click(SectionId::Contact)>
                        "Get Started →"
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-nav">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || nav_link_class(active.get() == section)
                                    on:click=move |_| nav_click(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="mobile-cta" on:click=move |_| nav_click(SectionId::Contact)>
                        "Get Started"
                    </button>
                </nav>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0, 20.0));
        assert!(!is_scrolled(20.0, 20.0));
        assert!(is_scrolled(20.5, 20.0));
    }

    #[test]
    fn active_link_is_marked() {
        assert_eq!(nav_link_class(true), "nav-link active");
        assert_eq!(nav_link_class(false), "nav-link");
    }

    #[test]
    fn nav_items_stagger_by_100ms() {
        assert_eq!(nav_item_style(0), "--nav-delay: 0ms");
        assert_eq!(nav_item_style(3), "--nav-delay: 300ms");
    }
}
