//! Render-ready snapshot of the page

use folio_content::{Project, Skill, SocialLink};
use folio_theme::{ColorScheme, ColorTokens};
use serde::Serialize;
use smallvec::SmallVec;

/// One header link
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavLinkView<'a> {
    pub label: &'a str,
    pub href: &'a str,
    pub section: &'a str,
    /// Highlighted as the section being read
    pub active: bool,
}

/// Everything a renderer needs to paint the current frame
#[derive(Clone, Debug, Serialize)]
pub struct PageView<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub active_section: &'a str,
    pub nav: SmallVec<[NavLinkView<'a>; 8]>,
    pub menu_open: bool,
    pub header_condensed: bool,
    pub dark_theme: bool,
    pub scheme: ColorScheme,
    pub colors: ColorTokens,
    pub scroll_offset: f32,
    /// A section jump is animating
    pub navigating: bool,
    pub show_scroll_to_top: bool,
    pub skill_filter: Option<&'a str>,
    pub skill_categories: Vec<&'a str>,
    pub skills: Vec<&'a Skill>,
    pub project_filter: Option<&'a str>,
    pub project_categories: Vec<&'a str>,
    pub projects: Vec<&'a Project>,
    pub social_links: &'a [SocialLink],
}

impl PageView<'_> {
    pub fn active_link(&self) -> Option<&NavLinkView<'_>> {
        self.nav.iter().find(|link| link.active)
    }
}
