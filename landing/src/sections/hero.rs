use leptos::prelude::*;

use crate::config::VERSION;
use crate::reveal::group_style;
use crate::section::SectionId;

/// Headline numbers under the hero copy.
const METRICS: &[(&str, &str)] = &[
    ("20+", "Cloud deployments"),
    ("99.9%", "Uptime target"),
    ("50%", "Average cost savings"),
    ("24/7", "Automated monitoring"),
];

#[component]
pub fn Hero(
    /// Scrolls to a section and marks it active.
    on_navigate: Callback<SectionId>,
) -> impl IntoView {
    let badge_text = format!("{} · AI-enhanced DevOps", VERSION);
    view! {
        <section id=SectionId::Home.as_str() class="hero">
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-glow hero-glow-right"></div>
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge reveal" style=group_style(0)>
                        <span class="hero-badge-dot"></span>
                        {badge_text}
                    </div>
                    <h1 class="hero-title reveal" style=group_style(1)>
                        "Intelligent infrastructure,"
                        <br />
                        <span class="hero-title-accent">"delivered at cloud speed."</span>
                    </h1>
                    <p class="hero-description reveal" style=group_style(2)>
                        "We design, automate and operate cloud platforms that scale themselves. "
                        "Terraform, Kubernetes and CI/CD pipelines, with AI watching the dashboards so your team does not have to."
                    </p>
                    <div class="hero-actions reveal" style=group_style(3)>
                        <button class="btn btn-primary" on:click=move |_| on_navigate.run(SectionId::Projects)>
                            "Explore Solutions"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| on_navigate.run(SectionId::Contact)>
                            "Start a Project →"
                        </button>
                    </div>
                    <div class="hero-metrics reveal" style=group_style(4)>
                        {METRICS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="hero-metric">
                                        <div class="hero-metric-value">{*value}</div>
                                        <div class="hero-metric-label">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <button
                class="hero-scroll"
                aria-label="Scroll to about"
                on:click=move |_| on_navigate.run(SectionId::About)
            >
                "↓"
            </button>
        </section>
    }
}
