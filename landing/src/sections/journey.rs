use leptos::prelude::*;

use crate::reveal::group_style;
use crate::section::SectionId;

/// What a timeline entry marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MilestoneKind {
    Career,
    Learning,
    Achievement,
}

impl MilestoneKind {
    fn as_str(self) -> &'static str {
        match self {
            MilestoneKind::Career => "career",
            MilestoneKind::Learning => "learning",
            MilestoneKind::Achievement => "achievement",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            MilestoneKind::Career => "⌖",
            MilestoneKind::Learning => "▦",
            MilestoneKind::Achievement => "★",
        }
    }

    fn dot_class(self) -> String {
        format!("timeline-dot timeline-dot-{}", self.as_str())
    }
}

struct Milestone {
    year: &'static str,
    title: &'static str,
    description: &'static str,
    kind: MilestoneKind,
    details: &'static [&'static str],
}

const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2023",
        title: "Career Pivot Decision",
        description: "Made the strategic decision to transition from commercial sector to cloud technology",
        kind: MilestoneKind::Career,
        details: &[
            "Identified cloud computing as the future of technology",
            "Began intensive research into DevOps and AWS careers",
            "Started planning systematic learning approach",
        ],
    },
    Milestone {
        year: "2023",
        title: "AWS & Linux Foundation",
        description: "Completed comprehensive AWS and Linux training programs",
        kind: MilestoneKind::Learning,
        details: &[
            "AWS Cloud Practitioner and Solutions Architect study",
            "Linux system administration and command line mastery",
            "Hands-on labs with EC2, S3, VPC, and core services",
        ],
    },
    Milestone {
        year: "2024",
        title: "DevOps Methodology Mastery",
        description: "Deep dive into DevOps tools, practices, and automation",
        kind: MilestoneKind::Learning,
        details: &[
            "CI/CD pipeline design and implementation",
            "Infrastructure as Code with Terraform and CloudFormation",
            "Container orchestration with Docker and Kubernetes",
        ],
    },
    Milestone {
        year: "2024",
        title: "AI Integration Exploration",
        description: "Explored AI tools and their integration with DevOps workflows",
        kind: MilestoneKind::Learning,
        details: &[
            "Mastered 10+ AI tools for development and automation",
            "Built AI-enhanced monitoring and deployment solutions",
            "Integrated AI into infrastructure management workflows",
        ],
    },
    Milestone {
        year: "2024",
        title: "20+ Projects Deployed",
        description: "Achieved milestone of deploying 20+ real-world projects on AWS",
        kind: MilestoneKind::Achievement,
        details: &[
            "Multi-tier web applications with auto-scaling",
            "Serverless architectures using Lambda and API Gateway",
            "Complete CI/CD pipelines with monitoring and alerting",
        ],
    },
    Milestone {
        year: "2025",
        title: "Professional DevOps Ready",
        description: "Ready to contribute to forward-thinking organizations as a DevOps Engineer",
        kind: MilestoneKind::Career,
        details: &[
            "Comprehensive skill set in cloud architecture and automation",
            "Proven track record of successful project deliveries",
            "Fresh perspective with modern, cloud-native approaches",
        ],
    },
];

/// Entries alternate sides of the timeline, starting on the left.
fn side_class(index: usize) -> &'static str {
    if index % 2 == 0 { "timeline-item left" } else { "timeline-item right" }
}

#[component]
pub fn Journey() -> impl IntoView {
    view! {
        <section id=SectionId::Journey.as_str() class="journey">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"My Journey"</h2>
                    <p class="section-description">
                        "From commercial background to cloud expertise - a transformation driven by passion and dedication"
                    </p>
                </div>

                <div class="timeline">
                    <div class="timeline-line"></div>
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(i, milestone)| view! { <TimelineEntry index=i milestone=milestone /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(index: usize, milestone: &'static Milestone) -> impl IntoView {
    view! {
        <div class=side_class(index)>
            <div class=milestone.kind.dot_class()>{milestone.kind.glyph()}</div>
            <div class="timeline-card reveal" style=group_style(index)>
                <div class="timeline-meta">
                    <span class="timeline-year">{milestone.year}</span>
                    <span class="timeline-kind">{milestone.kind.as_str()}</span>
                </div>
                <h3 class="timeline-title">{milestone.title}</h3>
                <p class="timeline-description">{milestone.description}</p>
                <ul class="timeline-details">
                    {milestone
                        .details
                        .iter()
                        .map(|detail| view! { <li>"→ " {*detail}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_is_chronological() {
        let years: Vec<&str> = TIMELINE.iter().map(|m| m.year).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
    }

    #[test]
    fn every_milestone_has_details() {
        assert_eq!(TIMELINE.len(), 6);
        assert!(TIMELINE.iter().all(|m| !m.details.is_empty()));
    }

    #[test]
    fn sides_alternate() {
        assert_eq!(side_class(0), "timeline-item left");
        assert_eq!(side_class(1), "timeline-item right");
        assert_eq!(side_class(4), "timeline-item left");
    }

    #[test]
    fn kinds_style_their_dots() {
        assert_eq!(
            MilestoneKind::Achievement.dot_class(),
            "timeline-dot timeline-dot-achievement"
        );
        assert_eq!(MilestoneKind::Career.as_str(), "career");
    }
}
