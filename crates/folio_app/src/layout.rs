//! Section layout
//!
//! Estimates where each section sits on the page from the content it renders
//! and publishes the result through [`SharedAnchor`]s, which the section
//! registry reads on every scroll sample. Re-running the layout (resize, a
//! category filter) updates the anchors in place; the registry never needs
//! rebuilding.

use folio_content::{Portfolio, SectionKind};
use folio_core::{Bounds, SectionRegistry, SharedAnchor};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::Result;

/// Category filters that change what a section renders; `None` shows all
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentFilters<'a> {
    pub skills: Option<&'a str>,
    pub projects: Option<&'a str>,
}

#[derive(Clone, Debug)]
pub struct SectionSlot {
    pub id: String,
    pub kind: SectionKind,
    anchor: SharedAnchor,
    bounds: Bounds,
}

impl SectionSlot {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[derive(Clone, Debug)]
pub struct PageLayout {
    slots: Vec<SectionSlot>,
    content_height: f32,
    viewport_height: f32,
}

impl PageLayout {
    /// Lay out every section of `portfolio`, top to bottom
    pub fn new(portfolio: &Portfolio, config: &LayoutConfig, filters: ContentFilters<'_>) -> Self {
        let slots = portfolio
            .sections()
            .map(|entry| SectionSlot {
                id: entry.id.to_string(),
                kind: entry.kind,
                anchor: SharedAnchor::unmounted(),
                bounds: Bounds::default(),
            })
            .collect();

        let mut layout = Self {
            slots,
            content_height: 0.0,
            viewport_height: config.viewport_height,
        };
        layout.relayout(portfolio, config, filters);
        layout
    }

    /// Recompute section extents and publish them to the anchors
    pub fn relayout(
        &mut self,
        portfolio: &Portfolio,
        config: &LayoutConfig,
        filters: ContentFilters<'_>,
    ) {
        let mut top = 0.0;
        for slot in &mut self.slots {
            let height = estimate_height(slot.kind, portfolio, config, filters);
            slot.bounds = Bounds::vertical(top, height);
            slot.anchor.set(slot.bounds);
            top += height;
        }
        self.content_height = top + config.footer_height;
        self.viewport_height = config.viewport_height;
        debug!(
            sections = self.slots.len(),
            content_height = self.content_height,
            viewport_height = self.viewport_height,
            "page laid out"
        );
    }

    /// A registry reading this layout's anchors
    pub fn registry(&self) -> Result<SectionRegistry> {
        let mut builder = SectionRegistry::builder();
        for slot in &self.slots {
            builder.push(slot.id.as_str(), slot.anchor.clone());
        }
        Ok(builder.build()?)
    }

    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    pub fn bounds(&self, id: &str) -> Option<Bounds> {
        self.slots.iter().find(|s| s.id == id).map(|s| s.bounds)
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Estimated height of one section
pub fn estimate_height(
    kind: SectionKind,
    portfolio: &Portfolio,
    config: &LayoutConfig,
    filters: ContentFilters<'_>,
) -> f32 {
    let framed = |body: f32| config.section_padding + config.heading_height + body;
    let card = |paragraphs: &[String]| {
        config.card_chrome
            + paragraphs.iter().map(|p| config.text_height(p)).sum::<f32>()
            + config.card_spacing
    };

    match kind {
        // Full-screen hero
        SectionKind::Hero => config.viewport_height,
        SectionKind::About => {
            framed(config.text_height(&portfolio.personal.summary) + config.about_height)
        }
        SectionKind::Skills => {
            let visible = portfolio.skills_in(filters.skills).len();
            let rows = visible.div_ceil(config.skill_columns.max(1));
            framed(config.filter_bar_height + rows as f32 * config.skill_row_height)
        }
        SectionKind::Experience => framed(
            portfolio
                .experiences
                .iter()
                .map(|e| card(e.description.as_slice()))
                .sum(),
        ),
        SectionKind::Projects => framed(
            config.filter_bar_height
                + portfolio
                    .projects_in(filters.projects)
                    .iter()
                    .map(|p| card(p.description.as_slice()) + config.tag_row_height)
                    .sum::<f32>(),
        ),
        SectionKind::Education => {
            let degrees: f32 = portfolio
                .education
                .iter()
                .map(|e| {
                    config.card_chrome
                        + e.details.as_deref().map_or(0.0, |d| config.text_height(d))
                        + config.card_spacing
                })
                .sum();
            let certificates: f32 = portfolio
                .certificates
                .iter()
                .map(|c| {
                    config.card_chrome + config.text_height(&c.description) + config.card_spacing
                })
                .sum();
            framed(degrees + certificates)
        }
        SectionKind::Contact => framed(config.contact_height),
    }
}
