//! Section scroll coordinator
//!
//! Owns the registry, the sampler, the dispatcher and the navigation state,
//! and is driven by discrete host events:
//!
//! - [`ScrollCoordinator::on_scroll`] for every scroll-position notification
//! - [`ScrollCoordinator::navigate`] for nav-link clicks
//! - [`ScrollCoordinator::toggle_theme`] / [`ScrollCoordinator::toggle_menu`]
//!   for the header buttons
//! - [`ScrollCoordinator::finish_transition`] when the host's smooth scroll settles
//!
//! All calls are synchronous and must come from the UI thread. Subscribers
//! are notified once per event that changed the snapshot.

use tracing::{debug, trace};

use crate::config::CoordinatorConfig;
use crate::dispatcher::{LockDecision, NavigationDispatcher, ScrollHost};
use crate::error::{NavigationError, Result};
use crate::sampler::ScrollSampler;
use crate::section::{SectionId, SectionRegistry};
use crate::state::{NavigationState, Observers, SubscriptionId};

/// What a scroll sample did to the active section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// A different section became active
    Changed,
    /// The sample matched the active section, or nothing matched
    Unchanged,
    /// A navigation lock discarded the sample
    Suppressed,
    /// The offset was not a finite number
    Ignored,
}

pub struct ScrollCoordinator<H: ScrollHost> {
    registry: SectionRegistry,
    sampler: ScrollSampler,
    dispatcher: NavigationDispatcher,
    state: NavigationState,
    observers: Observers,
    host: H,
    header_condense_threshold: f32,
    last_offset: f32,
}

impl<H: ScrollHost> ScrollCoordinator<H> {
    /// Mount the coordinator with the first section active
    pub fn new(registry: SectionRegistry, config: CoordinatorConfig, host: H) -> Result<Self> {
        let first = registry.first().cloned().ok_or(NavigationError::EmptyRegistry)?;
        debug!(
            sections = registry.len(),
            first = %first,
            bias = config.offset_bias,
            suppress = config.suppress_during_navigation,
            "scroll coordinator mounted"
        );

        Ok(Self {
            registry,
            sampler: ScrollSampler::new(config.offset_bias),
            dispatcher: NavigationDispatcher::new(
                config.suppress_during_navigation,
                config.max_suppressed_samples,
            ),
            state: NavigationState::new(first),
            observers: Observers::default(),
            host,
            header_condense_threshold: config.header_condense_threshold,
            last_offset: 0.0,
        })
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Feed a scroll-position notification
    pub fn on_scroll(&mut self, offset: f32) -> ScrollOutcome {
        if !offset.is_finite() {
            trace!(offset, "ignoring non-finite scroll offset");
            return ScrollOutcome::Ignored;
        }
        self.last_offset = offset;

        let condensed = offset > self.header_condense_threshold;
        let header_changed = condensed != self.state.header_condensed;
        self.state.header_condensed = condensed;

        let sampled = self.sampler.sample(&self.registry, offset);
        trace!(offset, sampled = ?sampled.map(SectionId::as_str), "scroll sample");

        let outcome = match self.dispatcher.filter_sample(sampled) {
            LockDecision::Suppressed => ScrollOutcome::Suppressed,
            LockDecision::Apply | LockDecision::Released => match sampled {
                Some(id) if *id != self.state.active_section => {
                    debug!(from = %self.state.active_section, to = %id, "active section changed");
                    self.state.active_section = id.clone();
                    ScrollOutcome::Changed
                }
                _ => ScrollOutcome::Unchanged,
            },
        };

        if header_changed || outcome == ScrollOutcome::Changed {
            self.observers.notify(&self.state);
        }
        outcome
    }

    /// Jump to a section: activate it, close the menu, start the smooth scroll
    ///
    /// Unknown ids return [`NavigationError::SectionNotFound`] and change nothing.
    pub fn navigate(&mut self, id: &str) -> Result<()> {
        let before = self.state.clone();
        self.dispatcher
            .dispatch(&self.registry, &mut self.state, &mut self.host, id)?;
        if self.state != before {
            self.observers.notify(&self.state);
        }
        Ok(())
    }

    /// The host's scroll animation settled; resume passive tracking
    pub fn finish_transition(&mut self) {
        self.dispatcher.release();
    }

    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        debug!(dark = self.state.dark_theme, "theme toggled");
        self.observers.notify(&self.state);
    }

    /// Apply a theme preference (e.g. the host's preferred color scheme)
    pub fn set_dark_theme(&mut self, dark: bool) {
        if self.state.dark_theme != dark {
            self.toggle_theme();
        }
    }

    pub fn toggle_menu(&mut self) {
        self.state.toggle_menu();
        debug!(open = self.state.menu_open, "menu toggled");
        self.observers.notify(&self.state);
    }

    pub fn close_menu(&mut self) {
        if self.state.menu_open {
            self.toggle_menu();
        }
    }

    // =========================================================================
    // OBSERVERS
    // =========================================================================

    /// Register a snapshot callback; it runs after every visible change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NavigationState) + 'static,
    {
        self.observers.insert(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn sampler(&self) -> &ScrollSampler {
        &self.sampler
    }

    /// Whether a navigation lock is currently suppressing samples
    pub fn is_navigating(&self) -> bool {
        self.dispatcher.is_locked()
    }

    /// The most recent finite scroll offset seen
    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;
    use crate::dispatcher::ScrollRequest;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingHost {
        requests: Vec<(SectionId, Option<f32>)>,
    }

    impl ScrollHost for RecordingHost {
        fn scroll_to(&mut self, request: ScrollRequest<'_>) {
            self.requests
                .push((request.section.clone(), request.target_offset));
        }
    }

    fn page() -> SectionRegistry {
        SectionRegistry::builder()
            .section("hero", Bounds::vertical(0.0, 800.0))
            .section("about", Bounds::vertical(800.0, 600.0))
            .section("skills", Bounds::vertical(1400.0, 700.0))
            .build()
            .unwrap()
    }

    fn coordinator(config: CoordinatorConfig) -> ScrollCoordinator<RecordingHost> {
        ScrollCoordinator::new(page(), config, RecordingHost::default()).unwrap()
    }

    #[test]
    fn test_example_scenario() {
        let mut nav = coordinator(CoordinatorConfig::default());

        nav.on_scroll(0.0);
        assert_eq!(nav.state().active_section(), "hero");

        nav.on_scroll(750.0);
        assert_eq!(nav.state().active_section(), "about");

        // Past the end: keep the previous section
        assert_eq!(nav.on_scroll(2200.0), ScrollOutcome::Unchanged);
        assert_eq!(nav.state().active_section(), "about");

        nav.navigate("skills").unwrap();
        assert_eq!(nav.state().active_section(), "skills");
        assert!(!nav.state().is_menu_open());
        assert_eq!(
            nav.host().requests,
            vec![(SectionId::from("skills"), Some(1400.0))]
        );

        let err = nav.navigate("footer").unwrap_err();
        assert_eq!(err, NavigationError::SectionNotFound("footer".into()));
        assert_eq!(nav.state().active_section(), "skills");
        assert_eq!(nav.host().requests.len(), 1);
    }

    #[test]
    fn test_navigation_is_idempotent() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.toggle_menu();
        assert!(nav.state().is_menu_open());

        nav.navigate("about").unwrap();
        nav.navigate("about").unwrap();

        assert_eq!(nav.state().active_section(), "about");
        assert!(!nav.state().is_menu_open());
        assert_eq!(nav.host().requests.len(), 2);
    }

    #[test]
    fn test_unknown_id_keeps_menu_state() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.toggle_menu();
        let before = nav.state().clone();

        assert!(nav.navigate("blog").is_err());
        assert_eq!(nav.state(), &before);
        assert!(!nav.is_navigating());
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.on_scroll(750.0);
        nav.toggle_menu();
        let before = nav.state().clone();

        nav.toggle_theme();
        assert!(nav.state().is_dark_theme());
        assert_eq!(nav.state().active_section(), "about");
        assert!(nav.state().is_menu_open());

        nav.toggle_theme();
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_samples_suppressed_during_navigation() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.navigate("skills").unwrap();
        assert!(nav.is_navigating());

        // The smooth scroll passes through "about" on its way down
        assert_eq!(nav.on_scroll(300.0), ScrollOutcome::Suppressed);
        assert_eq!(nav.on_scroll(900.0), ScrollOutcome::Suppressed);
        assert_eq!(nav.state().active_section(), "skills");

        // Arrival releases the lock
        assert_eq!(nav.on_scroll(1400.0), ScrollOutcome::Unchanged);
        assert!(!nav.is_navigating());

        assert_eq!(nav.on_scroll(750.0), ScrollOutcome::Changed);
        assert_eq!(nav.state().active_section(), "about");
    }

    #[test]
    fn test_finish_transition_resumes_sampling() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.navigate("skills").unwrap();
        assert_eq!(nav.on_scroll(900.0), ScrollOutcome::Suppressed);

        nav.finish_transition();
        assert!(!nav.is_navigating());
        assert_eq!(nav.on_scroll(900.0), ScrollOutcome::Changed);
        assert_eq!(nav.state().active_section(), "about");
    }

    #[test]
    fn test_flicker_behaviour_without_suppression() {
        let mut nav = coordinator(CoordinatorConfig::without_suppression());
        nav.navigate("skills").unwrap();
        assert!(!nav.is_navigating());

        assert_eq!(nav.on_scroll(900.0), ScrollOutcome::Changed);
        assert_eq!(nav.state().active_section(), "about");
    }

    #[test]
    fn test_header_condenses_past_threshold() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.on_scroll(50.0);
        assert!(!nav.state().is_header_condensed());
        nav.on_scroll(51.0);
        assert!(nav.state().is_header_condensed());

        // Header tracking ignores the navigation lock
        nav.navigate("skills").unwrap();
        nav.on_scroll(10.0);
        assert!(!nav.state().is_header_condensed());
    }

    #[test]
    fn test_non_finite_offset_ignored() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.on_scroll(750.0);
        assert_eq!(nav.on_scroll(f32::NAN), ScrollOutcome::Ignored);
        assert_eq!(nav.last_offset(), 750.0);
        assert_eq!(nav.state().active_section(), "about");
    }

    #[test]
    fn test_subscribers_see_changes_only() {
        let mut nav = coordinator(CoordinatorConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = nav.subscribe(move |s| {
            seen_clone
                .borrow_mut()
                .push(s.active_section().to_string());
        });

        nav.on_scroll(10.0); // hero again, header unchanged
        nav.on_scroll(750.0); // about + header condensed
        nav.on_scroll(760.0); // nothing visible changed
        nav.navigate("skills").unwrap();
        assert!(nav.navigate("nowhere").is_err());

        assert_eq!(*seen.borrow(), vec!["about", "skills"]);

        assert!(nav.unsubscribe(id));
        nav.toggle_theme();
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(nav.subscriber_count(), 0);
    }

    #[test]
    fn test_set_dark_theme_and_close_menu() {
        let mut nav = coordinator(CoordinatorConfig::default());
        nav.set_dark_theme(true);
        nav.set_dark_theme(true);
        assert!(nav.state().is_dark_theme());

        nav.close_menu();
        assert!(!nav.state().is_menu_open());
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.state().is_menu_open());
    }
}
