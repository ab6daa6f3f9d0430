//! Portfolio content types

use serde::{Deserialize, Serialize};

/// The kind of content a page section renders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl SectionKind {
    /// Infer the kind from a conventional section id
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "home" | "hero" => Some(SectionKind::Hero),
            "about" => Some(SectionKind::About),
            "skills" => Some(SectionKind::Skills),
            "experience" => Some(SectionKind::Experience),
            "projects" => Some(SectionKind::Projects),
            "education" => Some(SectionKind::Education),
            "contact" => Some(SectionKind::Contact),
            _ => None,
        }
    }
}

/// A header navigation link
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// In-page anchor, `#<section id>`
    pub href: String,
    /// Explicit kind for ids that do not follow the naming convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SectionKind>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind: None,
        }
    }

    /// The section id this link targets, if the href is an in-page anchor
    pub fn section_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }

    pub fn section_kind(&self) -> Option<SectionKind> {
        self.kind.or_else(|| self.section_id().and_then(SectionKind::from_id))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0-100
    pub proficiency: u8,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Icon name understood by the renderer
    pub icon: String,
}

impl SocialLink {
    /// Web profiles open in a new tab; mail and phone links do not
    pub fn opens_externally(&self) -> bool {
        !(self.url.starts_with("mailto:") || self.url.starts_with("tel:"))
    }

    /// Link text: the URL without its scheme
    pub fn display_text(&self) -> &str {
        let url = self.url.as_str();
        ["https://", "http://", "mailto:", "tel:"]
            .iter()
            .find_map(|scheme| url.strip_prefix(scheme))
            .unwrap_or(url)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub volunteer: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_section_id() {
        assert_eq!(NavItem::new("About", "#about").section_id(), Some("about"));
        assert_eq!(NavItem::new("Blog", "/blog").section_id(), None);
        assert_eq!(NavItem::new("Top", "#").section_id(), None);
    }

    #[test]
    fn test_nav_item_kind_inference() {
        assert_eq!(
            NavItem::new("Home", "#home").section_kind(),
            Some(SectionKind::Hero)
        );
        assert_eq!(NavItem::new("Talks", "#talks").section_kind(), None);

        let mut talks = NavItem::new("Talks", "#talks");
        talks.kind = Some(SectionKind::Projects);
        assert_eq!(talks.section_kind(), Some(SectionKind::Projects));
    }

    #[test]
    fn test_social_link_targets() {
        let github = SocialLink {
            platform: "GitHub".into(),
            url: "https://github.com/someone".into(),
            icon: "Github".into(),
        };
        let phone = SocialLink {
            platform: "Phone".into(),
            url: "tel:+100".into(),
            icon: "Phone".into(),
        };

        assert!(github.opens_externally());
        assert!(!phone.opens_externally());
        assert_eq!(github.display_text(), "github.com/someone");
        assert_eq!(phone.display_text(), "+100");
    }
}
