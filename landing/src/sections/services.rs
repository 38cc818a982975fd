use leptos::prelude::*;

use crate::reveal::group_style;
use crate::section::SectionId;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=SectionId::Services.as_str() class="services">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Services"</p>
                    <h2 class="section-title">"How We Can Help"</h2>
                    <p class="section-description">
                        "Fixed-scope engagements or an embedded platform engineer, whichever fits your team."
                    </p>
                </div>
                <div class="services-grid">
                    <ServiceCard
                        index=0
                        icon="☁"
                        title="Cloud Migration"
                        description="Assessment, landing zone and wave-by-wave migration of existing workloads to AWS."
                        deliverables=&["Readiness assessment", "Migration runbooks", "Cut-over support"]
                    />
                    <ServiceCard
                        index=1
                        icon="⚙"
                        title="CI/CD Automation"
                        description="Pipelines that build, test, scan and ship on every merge, with rollbacks that just work."
                        deliverables=&["Pipeline as code", "Preview environments", "Release dashboards"]
                    />
                    <ServiceCard
                        index=2
                        icon="▣"
                        title="Kubernetes Platforms"
                        description="Production EKS clusters with GitOps, autoscaling and sane multi-tenancy."
                        deliverables=&["Cluster baseline", "Helm/Argo setup", "Cost guardrails"]
                    />
                    <ServiceCard
                        index=3
                        icon="◉"
                        title="Observability & SRE"
                        description="Metrics, logs, traces and SLOs wired to alerts that page the right person."
                        deliverables=&["SLO workshop", "Dashboards", "On-call playbooks"]
                    />
                    <ServiceCard
                        index=4
                        icon="✦"
                        title="AI-Enhanced Ops"
                        description="LLM assistants for incident triage, change review and infrastructure Q&A."
                        deliverables=&["Use-case discovery", "Agent prototypes", "Guardrails & evals"]
                    />
                    <ServiceCard
                        index=5
                        icon="$"
                        title="Cost Optimization"
                        description="Right-sizing, savings plans and waste hunting with a monthly FinOps report."
                        deliverables=&["Spend audit", "Tagging policy", "Savings roadmap"]
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(
    index: usize,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    deliverables: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="service-card reveal" style=group_style(index % 3)>
            <div class="service-icon">{icon}</div>
            <h3 class="service-title">{title}</h3>
            <p class="service-description">{description}</p>
            <ul class="service-deliverables">
                {deliverables.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
            </ul>
        </div>
    }
}
