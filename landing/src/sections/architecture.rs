use leptos::prelude::*;

use crate::reveal::group_style;
use crate::section::SectionId;

/// Tier of the reference architecture diagram, top (edge) to bottom (data).
const TIERS: &[(&str, &[&str])] = &[
    ("Edge", &["CloudFront", "WAF", "Route 53"]),
    ("Ingress", &["Application Load Balancer", "API Gateway"]),
    ("Compute", &["EKS", "Lambda", "Fargate"]),
    ("Data", &["Aurora", "DynamoDB", "S3", "ElastiCache"]),
    ("Observability", &["Prometheus", "Grafana", "CloudWatch"]),
];

const PRINCIPLES: &[(&str, &str)] = &[
    ("Everything as code", "Every resource lives in Terraform, reviewed like application code."),
    ("Immutable deploys", "Images are built once and promoted, never patched in place."),
    ("Least privilege", "Scoped IAM roles per workload, no long-lived keys."),
    ("Designed to fail", "Multi-AZ by default, with chaos drills before launch."),
];

#[component]
pub fn Architecture() -> impl IntoView {
    view! {
        <section id=SectionId::Architecture.as_str() class="architecture">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Architecture"</p>
                    <h2 class="section-title">"A Reference Cloud Blueprint"</h2>
                    <p class="section-description">
                        "The layered design most engagements start from, tuned per workload."
                    </p>
                </div>

                <div class="arch-diagram">
                    {TIERS
                        .iter()
                        .enumerate()
                        .map(|(i, (tier, services))| {
                            view! {
                                <div class="arch-tier reveal" style=group_style(i)>
                                    <span class="arch-tier-name">{*tier}</span>
                                    <div class="arch-tier-services">
                                        {services
                                            .iter()
                                            .map(|s| view! { <span class="arch-node">{*s}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="arch-principles">
                    {PRINCIPLES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="arch-principle">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
