//! Navigation state and its observers
//!
//! [`NavigationState`] is the one record the page renderer reads: which
//! section is active, whether the mobile menu is open, whether the dark
//! theme is on and whether the header is in its condensed style. It is
//! created once when the page mounts and never persisted.
//!
//! Mutation goes through the coordinator only. Renderers subscribe to
//! snapshots instead of reaching for ambient globals.

use serde::Serialize;
use slotmap::{new_key_type, SlotMap};

use crate::section::SectionId;

new_key_type! {
    /// Handle returned by [`crate::ScrollCoordinator::subscribe`]
    pub struct SubscriptionId;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub(crate) active_section: SectionId,
    pub(crate) menu_open: bool,
    pub(crate) dark_theme: bool,
    pub(crate) header_condensed: bool,
}

impl NavigationState {
    /// Mount-time defaults: `first` active, menu closed, light theme
    pub fn new(first: SectionId) -> Self {
        Self {
            active_section: first,
            menu_open: false,
            dark_theme: false,
            header_condensed: false,
        }
    }

    pub fn active_section(&self) -> &SectionId {
        &self.active_section
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    /// Whether the page is scrolled far enough for the compact header
    pub fn is_header_condensed(&self) -> bool {
        self.header_condensed
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
    }

    pub(crate) fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

type Observer = Box<dyn FnMut(&NavigationState)>;

/// Snapshot subscribers
#[derive(Default)]
pub(crate) struct Observers {
    callbacks: SlotMap<SubscriptionId, Observer>,
}

impl Observers {
    pub(crate) fn insert(&mut self, callback: Observer) -> SubscriptionId {
        self.callbacks.insert(callback)
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub(crate) fn notify(&mut self, state: &NavigationState) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        let state = NavigationState::new("hero".into());
        assert_eq!(state.active_section(), "hero");
        assert!(!state.is_menu_open());
        assert!(!state.is_dark_theme());
        assert!(!state.is_header_condensed());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = NavigationState::new("hero".into());
        state.toggle_theme();
        assert!(state.is_dark_theme());
        assert!(!state.is_menu_open());

        state.toggle_menu();
        assert!(state.is_menu_open());
        assert!(state.is_dark_theme());
        assert_eq!(state.active_section(), "hero");
    }

    #[test]
    fn test_observers_notify_and_remove() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        let seen_clone = seen.clone();
        let id = observers.insert(Box::new(move |s: &NavigationState| {
            seen_clone.borrow_mut().push(s.is_dark_theme());
        }));

        let mut state = NavigationState::new("hero".into());
        observers.notify(&state);
        state.toggle_theme();
        observers.notify(&state);
        assert_eq!(*seen.borrow(), vec![false, true]);

        assert!(observers.remove(id));
        assert!(!observers.remove(id));
        observers.notify(&state);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(observers.len(), 0);
    }
}
