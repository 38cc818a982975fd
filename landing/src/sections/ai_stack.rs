use leptos::prelude::*;

use crate::reveal::group_style;
use crate::section::SectionId;

struct Tool {
    name: &'static str,
    role: &'static str,
}

/// A layer of the AI-assisted operations toolkit.
struct Layer {
    title: &'static str,
    description: &'static str,
    tools: &'static [Tool],
}

const LAYERS: &[Layer] = &[
    Layer {
        title: "Code & Review",
        description: "AI pair programming for IaC modules, pipeline definitions and scripts.",
        tools: &[
            Tool { name: "GitHub Copilot", role: "Inline completion" },
            Tool { name: "Claude", role: "Design review & refactoring" },
            Tool { name: "Cursor", role: "Repository-wide edits" },
        ],
    },
    Layer {
        title: "Operate & Observe",
        description: "Models that read telemetry so humans only look at what matters.",
        tools: &[
            Tool { name: "Amazon DevOps Guru", role: "Anomaly detection" },
            Tool { name: "Datadog Watchdog", role: "Root-cause hints" },
            Tool { name: "Grafana ML", role: "Forecasting & outliers" },
        ],
    },
    Layer {
        title: "Automate & Respond",
        description: "Agents wired into runbooks, chat-ops and ticketing.",
        tools: &[
            Tool { name: "LangChain", role: "Runbook agents" },
            Tool { name: "Amazon Bedrock", role: "Managed model hosting" },
            Tool { name: "n8n", role: "Workflow glue" },
        ],
    },
];

#[component]
pub fn AiStack() -> impl IntoView {
    view! {
        <section id=SectionId::AiStack.as_str() class="ai-stack">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"AI Stack"</p>
                    <h2 class="section-title">"Automation With a Brain"</h2>
                    <p class="section-description">
                        "10+ AI tools folded into day-to-day DevOps work, from the first commit to the 3 a.m. page."
                    </p>
                </div>
                <div class="stack-layers">
                    {LAYERS
                        .iter()
                        .enumerate()
                        .map(|(i, layer)| {
                            view! {
                                <div class="stack-layer reveal" style=group_style(i)>
                                    <div class="stack-layer-index">{format!("0{}", i + 1)}</div>
                                    <h3 class="stack-layer-title">{layer.title}</h3>
                                    <p class="stack-layer-description">{layer.description}</p>
                                    <ul class="stack-tools">
                                        {layer
                                            .tools
                                            .iter()
                                            .map(|tool| {
                                                view! {
                                                    <li class="stack-tool">
                                                        <span class="stack-tool-name">{tool.name}</span>
                                                        <span class="stack-tool-role">{tool.role}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
