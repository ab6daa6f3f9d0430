//! Scroll sampler
//!
//! Maps a raw viewport scroll offset to the section that is "in view".
//! The probe point is the scroll offset plus a fixed lookahead, which
//! compensates for the sticky navigation bar covering the top of the
//! viewport. The first section in registry order whose `[top, bottom)`
//! extent contains the probe point wins.
//!
//! Sampling is a pure function of the registry and the offset: O(sections),
//! no allocation, safe to call on every scroll event.

use crate::section::{SectionId, SectionRegistry};

/// Lookahead added to the scroll offset before comparison, in pixels
pub const OFFSET_BIAS: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSampler {
    offset_bias: f32,
}

impl Default for ScrollSampler {
    fn default() -> Self {
        Self::new(OFFSET_BIAS)
    }
}

impl ScrollSampler {
    pub fn new(offset_bias: f32) -> Self {
        Self { offset_bias }
    }

    pub fn offset_bias(&self) -> f32 {
        self.offset_bias
    }

    /// The page coordinate compared against section extents
    ///
    /// Non-finite offsets yield `None`. Negative offsets (overscroll bounce)
    /// are clamped to the top of the page first.
    pub fn probe_point(&self, scroll_offset: f32) -> Option<f32> {
        if !scroll_offset.is_finite() {
            return None;
        }
        Some(scroll_offset.max(0.0) + self.offset_bias)
    }

    /// The section containing the probe point, if any
    ///
    /// Unmounted sections are skipped. `None` means "no match this tick"; the
    /// caller keeps whatever section was active before.
    pub fn sample<'r>(
        &self,
        registry: &'r SectionRegistry,
        scroll_offset: f32,
    ) -> Option<&'r SectionId> {
        let probe = self.probe_point(scroll_offset)?;
        registry
            .iter()
            .find(|(_, bounds)| bounds.map_or(false, |b| b.contains_y(probe)))
            .map(|(id, _)| id)
    }
}
