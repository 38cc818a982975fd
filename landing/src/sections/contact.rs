use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::config::use_site_config;
use crate::error::{LandingError, Result};
use crate::reveal::group_style;
use crate::section::SectionId;

const CHANNELS: &[(&str, &str, &str)] = &[
    ("LinkedIn", "linkedin.com/company/cloudnex", "https://www.linkedin.com/company/cloudnex"),
    ("GitHub", "github.com/cloudnex", "https://github.com/cloudnex"),
    ("Location", "Remote · EU & US time zones", ""),
];

const FEEDBACK_FOR: Duration = Duration::from_millis(2000);

/// Label state of the copy button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    fn from_outcome(outcome: &Result<()>) -> Self {
        match outcome {
            Ok(()) => CopyStatus::Copied,
            Err(_) => CopyStatus::Failed,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CopyStatus::Idle => "copy",
            CopyStatus::Copied => "copied",
            CopyStatus::Failed => "copy failed",
        }
    }
}

async fn copy_to_clipboard(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

fn mailto(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, subject.replace(' ', "%20"))
}

#[component]
pub fn Contact() -> impl IntoView {
    let email = use_site_config().contact_email;
    let (status, set_status) = signal(CopyStatus::Idle);

    let copy_email = {
        let email = email.clone();
        move |_| {
            let email = email.clone();
            spawn_local(async move {
                let outcome = copy_to_clipboard(&email).await;
                if let Err(err) = &outcome {
                    tracing::warn!("copy email failed: {}", err);
                }
                set_status.set(CopyStatus::from_outcome(&outcome));
                set_timeout(move || set_status.set(CopyStatus::Idle), FEEDBACK_FOR);
            });
        }
    };

    let mail_href = mailto(&email, "Project inquiry");

    view! {
        <section id=SectionId::Contact.as_str() class="contact">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Contact"</p>
                    <h2 class="section-title">"Let's Build Something Reliable"</h2>
                    <p class="section-description">
                        "Tell us about your platform. We usually reply within one business day."
                    </p>
                </div>
                <div class="contact-grid">
                    <div class="contact-card reveal" style=group_style(0)>
                        <span class="contact-label">"Email"</span>
                        <div class="contact-email-box">
                            <code class="contact-email">{email}</code>
                            <button class="copy-btn-small" on:click=copy_email>
                                {move || status.get().label()}
                            </button>
                        </div>
                        <a href=mail_href class="btn btn-primary">"Start a Conversation →"</a>
                    </div>
                    <ul class="contact-channels reveal" style=group_style(1)>
                        {CHANNELS
                            .iter()
                            .map(|(label, text, href)| {
                                let value = if href.is_empty() {
                                    view! { <span class="contact-value">{*text}</span> }.into_any()
                                } else {
                                    view! {
                                        <a href=*href target="_blank" class="contact-value">{*text}</a>
                                    }
                                        .into_any()
                                };
                                view! {
                                    <li class="contact-channel">
                                        <span class="contact-label">{*label}</span>
                                        {value}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copied_only_when_clipboard_accepts() {
        assert_eq!(CopyStatus::from_outcome(&Ok(())), CopyStatus::Copied);
        let rejected = Err(LandingError::Js("NotAllowedError".into()));
        assert_eq!(CopyStatus::from_outcome(&rejected), CopyStatus::Failed);
        assert_eq!(CopyStatus::from_outcome(&rejected).label(), "copy failed");
        assert_eq!(CopyStatus::default().label(), "copy");
    }

    #[test]
    fn mailto_encodes_spaces_in_subject() {
        assert_eq!(
            mailto("hello@cloudnex.dev", "Project inquiry"),
            "mailto:hello@cloudnex.dev?subject=Project%20inquiry"
        );
    }
}
