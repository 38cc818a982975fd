use leptos::prelude::*;

use crate::reveal::group_style;
use crate::section::SectionId;

/// Delivered solution shown as a case-study card.
struct Project {
    title: &'static str,
    category: &'static str,
    summary: &'static str,
    stack: &'static [&'static str],
    outcome: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Auto-Scaling Web Platform",
        category: "Infrastructure",
        summary: "Multi-tier application behind an Application Load Balancer with EC2 Auto Scaling groups and RDS Multi-AZ.",
        stack: &["AWS", "Terraform", "ALB", "RDS"],
        outcome: "Handled 10x traffic spikes with zero manual intervention",
    },
    Project {
        title: "Serverless API Backbone",
        category: "Serverless",
        summary: "Event-driven API built on Lambda, API Gateway and DynamoDB with per-route IAM policies.",
        stack: &["Lambda", "API Gateway", "DynamoDB", "SAM"],
        outcome: "70% lower running cost than the container baseline",
    },
    Project {
        title: "GitOps Delivery Pipeline",
        category: "CI/CD",
        summary: "Pull-request driven deployments to Kubernetes with automated tests, image scanning and progressive rollout.",
        stack: &["GitHub Actions", "Argo CD", "Kubernetes", "Trivy"],
        outcome: "Deploys went from weekly to dozens per day",
    },
    Project {
        title: "Observability Stack",
        category: "Monitoring",
        summary: "Centralised metrics, logs and alerting for a fleet of services, with SLO dashboards per team.",
        stack: &["Prometheus", "Grafana", "Loki", "Alertmanager"],
        outcome: "Mean time to detect cut from hours to minutes",
    },
    Project {
        title: "AI Incident Triage",
        category: "AIOps",
        summary: "LLM-assisted runbook agent that summarises alerts, correlates recent deploys and proposes remediations.",
        stack: &["Python", "OpenAI API", "PagerDuty", "CloudWatch"],
        outcome: "On-call pages resolved 40% faster",
    },
    Project {
        title: "Secure Landing Zone",
        category: "Security",
        summary: "Multi-account AWS Organization with guardrails, centralised logging and least-privilege SSO.",
        stack: &["Control Tower", "SCPs", "GuardDuty", "IAM Identity Center"],
        outcome: "Audit-ready baseline for every new workload",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="projects">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Solutions"</p>
                    <h2 class="section-title">"Built, Shipped, Running"</h2>
                    <p class="section-description">
                        "A selection of production platforms designed and delivered end to end."
                    </p>
                </div>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <article class="project-card reveal" style=group_style(i % 3)>
                                    <span class="project-category">{project.category}</span>
                                    <h3 class="project-title">{project.title}</h3>
                                    <p class="project-summary">{project.summary}</p>
                                    <div class="chip-list">
                                        {project
                                            .stack
                                            .iter()
                                            .map(|tech| view! { <span class="chip">{*tech}</span> })
                                            .collect_view()}
                                    </div>
                                    <p class="project-outcome">"✓ " {project.outcome}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
