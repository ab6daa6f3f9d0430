//! The portfolio page
//!
//! Wires content, layout, the scroll coordinator and the smooth scroll host
//! together. The page is driven entirely by [`PageEvent`]s and rendered from
//! [`PortfolioPage::view`].

use folio_animation::ScrollFrame;
use folio_content::{ContactForm, Portfolio, SectionKind};
use folio_core::{NavigationState, ScrollCoordinator, ScrollOutcome, SubscriptionId};
use folio_theme::{ColorScheme, Theme};
use tracing::{debug, info, warn};

use crate::config::PageConfig;
use crate::error::{AppError, Result};
use crate::events::{PageEffect, PageEvent};
use crate::host::SmoothScrollHost;
use crate::layout::{ContentFilters, PageLayout};
use crate::view::{NavLinkView, PageView};

/// Frame step used by [`PageEvent::Settle`]
pub const SETTLE_DT: f32 = 1.0 / 60.0;

/// Ten seconds at 60 fps
const MAX_SETTLE_FRAMES: usize = 600;

pub struct PortfolioPage {
    portfolio: Portfolio,
    config: PageConfig,
    layout: PageLayout,
    nav: ScrollCoordinator<SmoothScrollHost>,
    skill_filter: Option<String>,
    project_filter: Option<String>,
}

impl PortfolioPage {
    pub fn new(portfolio: Portfolio, config: PageConfig) -> Result<Self> {
        config.layout.validate()?;
        let layout = PageLayout::new(&portfolio, &config.layout, ContentFilters::default());
        let host = SmoothScrollHost::new(config.layout.scroll_spring, layout.max_scroll());
        let nav = ScrollCoordinator::new(layout.registry()?, config.coordinator.clone(), host)?;

        info!(
            name = %portfolio.personal.name,
            sections = layout.slots().len(),
            content_height = layout.content_height(),
            "portfolio page mounted"
        );

        Ok(Self {
            portfolio,
            config,
            layout,
            nav,
            skill_filter: None,
            project_filter: None,
        })
    }

    /// Apply one host event
    pub fn handle(&mut self, event: PageEvent) -> Result<Option<PageEffect>> {
        match event {
            PageEvent::Scroll { offset } => {
                self.scroll(offset);
            }
            PageEvent::Navigate { section } => self.navigate(&section)?,
            PageEvent::GetInTouch => self.get_in_touch()?,
            PageEvent::ScrollToTop => self.scroll_to_top()?,
            PageEvent::ToggleTheme => self.nav.toggle_theme(),
            PageEvent::ToggleMenu => self.nav.toggle_menu(),
            PageEvent::Frame { dt } => {
                self.frame(dt);
            }
            PageEvent::Settle => {
                self.settle();
            }
            PageEvent::Resize { viewport_height } => self.resize(viewport_height),
            PageEvent::FilterSkills { category } => self.filter_skills(category)?,
            PageEvent::FilterProjects { category } => self.filter_projects(category)?,
            PageEvent::SubmitContact(mut form) => {
                let url = self.submit_contact(&mut form)?;
                return Ok(Some(PageEffect::OpenLink { url }));
            }
        }
        Ok(None)
    }

    // =========================================================================
    // SCROLLING
    // =========================================================================

    /// User scroll: moves the viewport directly and samples the new offset
    ///
    /// Taking over from a running section jump ends that jump.
    pub fn scroll(&mut self, offset: f32) -> ScrollOutcome {
        if !offset.is_finite() {
            return self.nav.on_scroll(offset);
        }
        let interrupted = self.nav.is_navigating();
        let offset = self.nav.host_mut().jump_to(offset);
        if interrupted {
            debug!(offset, "section jump interrupted by user scroll");
            self.nav.finish_transition();
        }
        self.nav.on_scroll(offset)
    }

    pub fn navigate(&mut self, section: &str) -> Result<()> {
        if let Err(err) = self.nav.navigate(section) {
            debug!(section, "navigation rejected: {}", err);
            return Err(err.into());
        }
        Ok(())
    }

    /// Jump to the contact section
    pub fn get_in_touch(&mut self) -> Result<()> {
        let contact = self
            .portfolio
            .section_for(SectionKind::Contact)
            .ok_or(AppError::MissingSection(SectionKind::Contact))?
            .to_string();
        self.navigate(&contact)
    }

    /// Jump to the first section
    pub fn scroll_to_top(&mut self) -> Result<()> {
        let first = self.layout.slots().first().map(|slot| slot.id.clone());
        match first {
            Some(id) => self.navigate(&id),
            None => Ok(()),
        }
    }

    /// Advance the scroll animation by `dt` seconds
    ///
    /// The new offset is sampled like any other scroll position; once the
    /// animation settles the navigation lock is released.
    pub fn frame(&mut self, dt: f32) -> Option<ScrollFrame> {
        let frame = self.nav.host_mut().tick(dt)?;
        self.nav.on_scroll(frame.offset);
        if frame.settled {
            debug!(offset = frame.offset, "section jump settled");
            self.nav.finish_transition();
        }
        Some(frame)
    }

    /// Run frames until the viewport is at rest; returns the frame count
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while frames < MAX_SETTLE_FRAMES && self.frame(SETTLE_DT).is_some() {
            frames += 1;
        }
        if self.nav.host().is_animating() {
            warn!(frames, "scroll animation did not settle");
        }
        frames
    }

    // =========================================================================
    // LAYOUT
    // =========================================================================

    pub fn resize(&mut self, viewport_height: f32) {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            warn!(viewport_height, "ignoring invalid viewport height");
            return;
        }
        self.config.layout.viewport_height = viewport_height;
        self.relayout();
    }

    /// Show one skill category, or all skills with `None`
    pub fn filter_skills(&mut self, category: Option<String>) -> Result<()> {
        check_category(&self.portfolio.skill_categories(), &category)?;
        if self.skill_filter != category {
            debug!(category = ?category, "skill filter changed");
            self.skill_filter = category;
            self.relayout();
        }
        Ok(())
    }

    /// Show one project category, or all projects with `None`
    pub fn filter_projects(&mut self, category: Option<String>) -> Result<()> {
        check_category(&self.portfolio.project_categories(), &category)?;
        if self.project_filter != category {
            debug!(category = ?category, "project filter changed");
            self.project_filter = category;
            self.relayout();
        }
        Ok(())
    }

    fn filters(&self) -> ContentFilters<'_> {
        ContentFilters {
            skills: self.skill_filter.as_deref(),
            projects: self.project_filter.as_deref(),
        }
    }

    /// Section extents changed; keep the viewport where it is and resample
    fn relayout(&mut self) {
        let filters = ContentFilters {
            skills: self.skill_filter.as_deref(),
            projects: self.project_filter.as_deref(),
        };
        self.layout.relayout(&self.portfolio, &self.config.layout, filters);
        let host = self.nav.host_mut();
        host.set_max_offset(self.layout.max_scroll());
        let offset = host.offset();
        self.nav.on_scroll(offset);
    }

    // =========================================================================
    // CONTACT
    // =========================================================================

    /// Compose the `mailto:` link for `form` and clear it
    pub fn submit_contact(&mut self, form: &mut ContactForm) -> Result<String> {
        Ok(form.submit(&self.portfolio.personal.email)?)
    }

    // =========================================================================
    // STATE
    // =========================================================================

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NavigationState) + 'static,
    {
        self.nav.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.nav.unsubscribe(id)
    }

    pub fn state(&self) -> &NavigationState {
        self.nav.state()
    }

    pub fn navigation(&self) -> &ScrollCoordinator<SmoothScrollHost> {
        &self.nav
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn scroll_offset(&self) -> f32 {
        self.nav.host().offset()
    }

    pub fn skill_filter(&self) -> Option<&str> {
        self.skill_filter.as_deref()
    }

    pub fn project_filter(&self) -> Option<&str> {
        self.project_filter.as_deref()
    }

    pub fn theme(&self) -> Theme {
        let scheme = ColorScheme::from_dark_flag(self.state().is_dark_theme());
        Theme::with_overrides(scheme, &self.config.theme)
    }

    pub fn view(&self) -> PageView<'_> {
        let state = self.nav.state();
        let active = state.active_section().as_str();
        let theme = self.theme();
        let offset = self.scroll_offset();
        let filters = self.filters();

        let nav = self
            .portfolio
            .nav
            .iter()
            .filter_map(|item| {
                let section = item.section_id()?;
                Some(NavLinkView {
                    label: &item.label,
                    href: &item.href,
                    section,
                    active: section == active,
                })
            })
            .collect();

        PageView {
            title: &self.portfolio.personal.name,
            subtitle: &self.portfolio.personal.title,
            active_section: active,
            nav,
            menu_open: state.is_menu_open(),
            header_condensed: state.is_header_condensed(),
            dark_theme: state.is_dark_theme(),
            scheme: theme.scheme(),
            colors: theme.colors().clone(),
            scroll_offset: offset,
            navigating: self.nav.is_navigating(),
            show_scroll_to_top: offset > self.config.layout.scroll_to_top_threshold,
            skill_filter: filters.skills,
            skill_categories: self.portfolio.skill_categories(),
            skills: self.portfolio.skills_in(filters.skills),
            project_filter: filters.projects,
            project_categories: self.portfolio.project_categories(),
            projects: self.portfolio.projects_in(filters.projects),
            social_links: &self.portfolio.social_links,
        }
    }
}

fn check_category(known: &[&str], category: &Option<String>) -> Result<()> {
    match category {
        Some(name) if !known.contains(&name.as_str()) => {
            Err(AppError::UnknownCategory(name.clone()))
        }
        _ => Ok(()),
    }
}
