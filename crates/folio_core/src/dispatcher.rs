//! Navigation dispatcher
//!
//! Handles explicit "go to section" commands. A dispatch optimistically marks
//! the target as active, closes the mobile menu and asks the host to smooth
//! scroll the target's anchor to the top of the viewport. The host animation
//! is fire-and-forget: the dispatcher never waits for it.
//!
//! While the animation is in flight the passive sampler would see every
//! section between the old position and the target, so the dispatcher can
//! hold a navigation lock that suppresses sampled updates until the scroll
//! arrives, the host reports completion, or a sample budget runs out.

use tracing::debug;

use crate::error::{NavigationError, Result};
use crate::section::{SectionId, SectionRegistry};
use crate::state::NavigationState;

/// A smooth-scroll command for the host environment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest<'a> {
    /// Section whose anchor should end up at the top of the viewport
    pub section: &'a SectionId,
    /// Top of the anchor in page coordinates, when it is mounted
    pub target_offset: Option<f32>,
}

/// Host side of the smooth-scroll command
///
/// Implementations start (or retarget) an animated scroll and return
/// immediately. A newer request is expected to override an older one.
pub trait ScrollHost {
    fn scroll_to(&mut self, request: ScrollRequest<'_>);
}

/// Host that ignores scroll commands (headless use, tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl ScrollHost for NoopHost {
    fn scroll_to(&mut self, _request: ScrollRequest<'_>) {}
}

/// Adapts a closure into a [`ScrollHost`]
pub struct FnHost<F>(F);

/// Wrap a closure as a scroll host
pub fn host_fn<F>(f: F) -> FnHost<F>
where
    F: FnMut(ScrollRequest<'_>),
{
    FnHost(f)
}

impl<F> ScrollHost for FnHost<F>
where
    F: FnMut(ScrollRequest<'_>),
{
    fn scroll_to(&mut self, request: ScrollRequest<'_>) {
        (self.0)(request)
    }
}

/// Outcome of running a sampled section through the navigation lock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockDecision {
    /// No lock held; the sample applies
    Apply,
    /// The lock was released by this sample; the sample applies
    Released,
    /// The lock is held; the sample is discarded
    Suppressed,
}

#[derive(Clone, Debug)]
struct NavigationLock {
    target: SectionId,
    remaining: u32,
}

#[derive(Clone, Debug)]
pub struct NavigationDispatcher {
    suppress: bool,
    max_suppressed_samples: u32,
    lock: Option<NavigationLock>,
}

impl NavigationDispatcher {
    pub fn new(suppress: bool, max_suppressed_samples: u32) -> Self {
        Self {
            suppress,
            max_suppressed_samples,
            lock: None,
        }
    }

    /// Move to `id`: update state, then issue the scroll command
    ///
    /// Unknown ids fail with [`NavigationError::SectionNotFound`] before
    /// anything is touched.
    pub fn dispatch<H: ScrollHost>(
        &mut self,
        registry: &SectionRegistry,
        state: &mut NavigationState,
        host: &mut H,
        id: &str,
    ) -> Result<()> {
        let Some(section) = registry.get(id) else {
            debug!(section = id, "navigation rejected: unknown section");
            return Err(NavigationError::SectionNotFound(SectionId::new(id)));
        };

        state.active_section = section.clone();
        state.menu_open = false;

        if self.suppress {
            debug!(section = %section, "navigation lock acquired");
            self.lock = Some(NavigationLock {
                target: section.clone(),
                remaining: self.max_suppressed_samples,
            });
        }

        host.scroll_to(ScrollRequest {
            section,
            target_offset: registry.geometry(id).map(|b| b.top()),
        });
        Ok(())
    }

    /// Decide whether a sampled section may overwrite the active section
    pub fn filter_sample(&mut self, sampled: Option<&SectionId>) -> LockDecision {
        let Some(lock) = self.lock.as_mut() else {
            return LockDecision::Apply;
        };

        if sampled == Some(&lock.target) {
            debug!(section = %lock.target, "navigation lock released: target reached");
            self.lock = None;
            return LockDecision::Released;
        }

        if lock.remaining == 0 {
            debug!(section = %lock.target, "navigation lock released: sample budget spent");
            self.lock = None;
            return LockDecision::Released;
        }

        lock.remaining -= 1;
        LockDecision::Suppressed
    }

    /// Drop the lock, e.g. when the host reports the scroll animation settled
    pub fn release(&mut self) -> Option<SectionId> {
        let lock = self.lock.take()?;
        debug!(section = %lock.target, "navigation lock released: transition finished");
        Some(lock.target)
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn lock_target(&self) -> Option<&SectionId> {
        self.lock.as_ref().map(|lock| &lock.target)
    }
}
