//! Section identifiers for the single-page layout.
//!
//! The order of [`SectionId::ALL`] is load-bearing: it is both the visual
//! stacking order of the page and the priority used when resolving which
//! section is under the header.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Addressable content block on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Journey,
    Projects,
    AiStack,
    Architecture,
    Services,
    Blog,
    Contact,
}

impl SectionId {
    /// Every section, top of the page first.
    pub const ALL: [SectionId; 9] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Journey,
        SectionId::Projects,
        SectionId::AiStack,
        SectionId::Architecture,
        SectionId::Services,
        SectionId::Blog,
        SectionId::Contact,
    ];

    /// DOM anchor (`id` attribute) of the section.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Journey => "journey",
            SectionId::Projects => "projects",
            SectionId::AiStack => "ai-stack",
            SectionId::Architecture => "architecture",
            SectionId::Services => "services",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation header.
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Journey => "Journey",
            SectionId::Projects => "Solutions",
            SectionId::AiStack => "AI Stack",
            SectionId::Architecture => "Architecture",
            SectionId::Services => "Services",
            SectionId::Blog => "Insights",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in [`SectionId::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn is_home(self) -> bool {
        self == SectionId::Home
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag does not name any section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn order_matches_page_layout() {
        let tags: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            tags,
            vec![
                "home",
                "about",
                "journey",
                "projects",
                "ai-stack",
                "architecture",
                "services",
                "blog",
                "contact",
            ]
        );
    }

    #[test]
    fn parses_every_tag_back() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        assert_eq!(
            "pricing".parse::<SectionId>(),
            Err(UnknownSection("pricing".into()))
        );
    }

    #[test]
    fn labels_differ_from_tags_where_renamed() {
        assert_eq!(SectionId::Projects.label(), "Solutions");
        assert_eq!(SectionId::Blog.label(), "Insights");
        assert_eq!(SectionId::AiStack.label(), "AI Stack");
    }

    #[test]
    fn serde_uses_kebab_tags() {
        let json = serde_json::to_string(&SectionId::AiStack).unwrap();
        assert_eq!(json, "\"ai-stack\"");
        let back: SectionId = serde_json::from_str("\"architecture\"").unwrap();
        assert_eq!(back, SectionId::Architecture);
    }

    #[test]
    fn index_follows_all() {
        assert_eq!(SectionId::Home.index(), 0);
        assert_eq!(SectionId::Contact.index(), 8);
    }
}
