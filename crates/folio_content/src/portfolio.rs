//! The portfolio dataset
//!
//! One dataset drives the whole page: the nav list fixes which sections exist
//! and in which order, the rest is the content each section renders.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::contact::is_valid_email;
use crate::error::{ContentError, Result};
use crate::model::{
    Certificate, Education, Experience, NavItem, PersonalInfo, Project, SectionKind, Skill,
    SocialLink,
};

const BUILTIN: &str = include_str!("../assets/portfolio.toml");

/// A page section derived from a nav item
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionEntry<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub kind: SectionKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl Portfolio {
    /// The content shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load and validate a content file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading portfolio content");
        Self::from_toml_str(&source)
    }

    /// Check the invariants the page relies on
    ///
    /// Sections must be unique in-page anchors of a known kind, skill
    /// proficiencies must be percentages and the contact email must be usable
    /// as a `mailto:` recipient.
    pub fn validate(&self) -> Result<()> {
        if self.nav.is_empty() {
            return Err(ContentError::MissingField("nav"));
        }
        if self.personal.name.trim().is_empty() {
            return Err(ContentError::MissingField("personal.name"));
        }
        if !is_valid_email(&self.personal.email) {
            return Err(ContentError::InvalidEmail(self.personal.email.clone()));
        }

        let mut seen = FxHashSet::default();
        for item in &self.nav {
            let id = item
                .section_id()
                .ok_or_else(|| ContentError::InvalidHref(item.href.clone()))?;
            if item.section_kind().is_none() {
                return Err(ContentError::UnknownSection(id.to_string()));
            }
            if !seen.insert(id) {
                return Err(ContentError::DuplicateSection(id.to_string()));
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.proficiency > 100) {
            return Err(ContentError::InvalidProficiency {
                skill: skill.name.clone(),
                value: skill.proficiency,
            });
        }

        for entry in self.sections() {
            if self.is_section_empty(entry.kind) {
                warn!(section = entry.id, "section has no content");
            }
        }
        Ok(())
    }

    /// Page sections in reading order
    ///
    /// Only meaningful on validated content: nav items without a resolvable
    /// id or kind are skipped.
    pub fn sections(&self) -> impl Iterator<Item = SectionEntry<'_>> {
        self.nav.iter().filter_map(|item| {
            Some(SectionEntry {
                id: item.section_id()?,
                label: &item.label,
                kind: item.section_kind()?,
            })
        })
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections().map(|entry| entry.id).collect()
    }

    /// Id of the section a kind is rendered in, e.g. the contact target of
    /// the header's "Get in Touch" button
    pub fn section_for(&self, kind: SectionKind) -> Option<&str> {
        self.sections()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.id)
    }

    fn is_section_empty(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Hero | SectionKind::About | SectionKind::Contact => false,
            SectionKind::Skills => self.skills.is_empty(),
            SectionKind::Experience => self.experiences.is_empty(),
            SectionKind::Projects => self.projects.is_empty(),
            SectionKind::Education => self.education.is_empty() && self.certificates.is_empty(),
        }
    }

    // =========================================================================
    // SKILLS
    // =========================================================================

    /// Distinct skill categories in first-appearance order
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.skills
            .iter()
            .map(|skill| skill.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Skills shown for a category filter; `None` shows everything
    pub fn skills_in(&self, category: Option<&str>) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| category.map_or(true, |c| skill.category == c))
            .collect()
    }

    // =========================================================================
    // PROJECTS
    // =========================================================================

    /// Distinct project categories in first-appearance order
    pub fn project_categories(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.projects
            .iter()
            .map(|project| project.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Projects shown for a category filter; `None` shows everything
    pub fn projects_in(&self, category: Option<&str>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| category.map_or(true, |c| project.category == c))
            .collect()
    }
}
