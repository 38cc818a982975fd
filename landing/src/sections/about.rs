use std::time::Duration;

use leptos::prelude::*;

use crate::config::BRAND;
use crate::reveal::{CHIP_STAGGER, group_style, reveal_style, stagger_delay};
use crate::section::SectionId;

const SKILLS: &[&str] = &[
    "AWS",
    "Terraform",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "GitHub Actions",
    "Linux",
    "Python",
    "Bash",
    "CloudFormation",
    "Ansible",
    "Prometheus",
    "Grafana",
    "ELK Stack",
    "CI/CD",
    "Infrastructure as Code",
    "Monitoring",
    "Security",
    "Cost Optimization",
    "Multi-cloud",
];

struct Highlight {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "◎",
        title: "Strategic Innovation",
        description: "Pioneering the integration of AI technologies with traditional DevOps practices to create next-generation infrastructure solutions",
        accent: "accent-cyan",
    },
    Highlight {
        icon: "⚡",
        title: "Rapid Deployment",
        description: "Accelerated learning methodology enabling mastery of cutting-edge cloud technologies and AI-enhanced automation workflows",
        accent: "accent-purple",
    },
    Highlight {
        icon: "★",
        title: "Proven Excellence",
        description: "Successfully architected and deployed 20+ enterprise-grade solutions using modern cloud-native approaches and best practices",
        accent: "accent-green",
    },
    Highlight {
        icon: "➜",
        title: "Future-Ready",
        description: "Bringing fresh perspectives and innovative methodologies to transform traditional infrastructure into intelligent, self-managing systems",
        accent: "accent-orange",
    },
];

#[component]
pub fn About() -> impl IntoView {
    let badge = format!("About {}", BRAND);
    view! {
        <section id=SectionId::About.as_str() class="about">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow reveal" style=group_style(0)>{badge}</p>
                    <h2 class="section-title reveal" style=group_style(1)>
                        "Redefining Cloud"
                        <br />
                        <span class="accent">"Infrastructure Excellence"</span>
                    </h2>
                    <p class="section-description reveal" style=group_style(2)>
                        "Where innovation meets infrastructure. We're pioneering the future of DevOps "
                        "through AI-enhanced automation and next-generation cloud architectures."
                    </p>
                </div>

                <div class="about-grid">
                    <div class="about-story reveal" style=group_style(0)>
                        <h3 class="about-story-title">"Our Vision"</h3>
                        <p>
                            {BRAND}
                            " represents a paradigm shift in how organizations approach cloud infrastructure. "
                            "Born from the intersection of traditional DevOps excellence and cutting-edge AI innovation, "
                            "we're not just adapting to the future, we're creating it."
                        </p>
                        <p>
                            "Our approach combines battle-tested cloud engineering principles with AI-powered automation, "
                            "delivering infrastructure that is scalable and secure, but also intelligent and self-optimizing."
                        </p>
                        <p>
                            "With over 20 successfully deployed enterprise solutions, we've proven that innovation "
                            "and reliability aren't mutually exclusive."
                        </p>
                        <div class="about-stats">
                            <div class="about-stat">
                                <div class="about-stat-value">"99.9%"</div>
                                <div class="about-stat-label">"Uptime Guarantee"</div>
                            </div>
                            <div class="about-stat">
                                <div class="about-stat-value">"50%"</div>
                                <div class="about-stat-label">"Cost Reduction"</div>
                            </div>
                        </div>
                    </div>

                    <div class="about-highlights">
                        {HIGHLIGHTS
                            .iter()
                            .enumerate()
                            .map(|(i, h)| {
                                view! {
                                    <div class=format!("highlight-card reveal {}", h.accent) style=group_style(i)>
                                        <div class="highlight-icon">{h.icon}</div>
                                        <h3 class="highlight-title">{h.title}</h3>
                                        <p class="highlight-description">{h.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="about-skills">
                    <h3 class="about-skills-title reveal" style=group_style(0)>"Technology Stack"</h3>
                    <div class="chip-list">
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <span class="chip reveal" style=chip_style(i)>{*skill}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn chip_style(index: usize) -> String {
    reveal_style(stagger_delay(index, Duration::ZERO, CHIP_STAGGER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_list_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for skill in SKILLS {
            assert!(seen.insert(*skill), "duplicate skill {skill}");
        }
        assert_eq!(SKILLS.len(), 20);
    }

    #[test]
    fn last_chip_lands_within_a_second() {
        assert_eq!(chip_style(SKILLS.len() - 1), "--reveal-delay: 950ms");
    }
}
