use leptos::prelude::*;

use crate::reveal::group_style;
use crate::section::SectionId;

/// Blog post metadata
struct BlogPost {
    title: &'static str,
    excerpt: &'static str,
    tag: &'static str,
    date: &'static str,
    read_time: &'static str,
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Terraform Modules That Don't Rot",
        excerpt: "Versioning, testing and documenting shared IaC so teams can reuse it without fear.",
        tag: "IAC",
        date: "2025-03-18",
        read_time: "7 min",
    },
    BlogPost {
        title: "Letting an LLM Read Your Alerts",
        excerpt: "What worked, what hallucinated, and the guardrails we ended up with for AI incident triage.",
        tag: "AIOPS",
        date: "2025-02-27",
        read_time: "9 min",
    },
    BlogPost {
        title: "EKS on a Startup Budget",
        excerpt: "Spot nodes, Karpenter and a few boring defaults that halved a cluster bill.",
        tag: "KUBERNETES",
        date: "2025-01-30",
        read_time: "6 min",
    },
];

/// CSS modifier for a post tag.
fn tag_class(tag: &str) -> String {
    format!("blog-tag tag-{}", tag.to_ascii_lowercase())
}

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id=SectionId::Blog.as_str() class="blog">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Insights"</p>
                    <h2 class="section-title">"Notes From the Pipeline"</h2>
                    <p class="section-description">
                        "Field notes on cloud architecture, automation and AI in operations."
                    </p>
                </div>
                <div class="blog-grid">
                    {POSTS
                        .iter()
                        .enumerate()
                        .map(|(i, post)| {
                            view! {
                                <article class="blog-card reveal" style=group_style(i)>
                                    <div class="blog-card-meta">
                                        <span class=tag_class(post.tag)>{post.tag}</span>
                                        <span class="blog-date">{post.date}</span>
                                    </div>
                                    <h3 class="blog-title">{post.title}</h3>
                                    <p class="blog-excerpt">{post.excerpt}</p>
                                    <div class="blog-footer">
                                        <span class="blog-read-time">{post.read_time} " read"</span>
                                        <span class="blog-read-more">"Coming soon"</span>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_become_lowercase_modifiers() {
        assert_eq!(tag_class("AIOPS"), "blog-tag tag-aiops");
    }

    #[test]
    fn posts_are_newest_first() {
        let dates: Vec<&str> = POSTS.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}
