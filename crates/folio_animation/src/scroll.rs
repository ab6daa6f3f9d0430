//! Spring-driven viewport scrolling
//!
//! The viewport offset runs from `0` (top of the page) to `max_offset`
//! (content height minus viewport height). A scroll request retargets the
//! spring; a request issued while another animation is running overrides it
//! and inherits the current velocity. Direct user scrolling cancels the
//! animation.

use tracing::trace;

use crate::spring::{Spring, SpringConfig};

/// One animation step, as reported to the page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Viewport offset after this step
    pub offset: f32,
    /// The animation reached its target on this step
    pub settled: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollAnimation {
    spring: Spring,
    max_offset: f32,
    running: bool,
}

impl ScrollAnimation {
    pub fn new(config: SpringConfig, max_offset: f32) -> Self {
        Self {
            spring: Spring::new(config, 0.0),
            max_offset: max_offset.max(0.0),
            running: false,
        }
    }

    pub fn offset(&self) -> f32 {
        self.spring.value()
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Target of the current (or last) animation
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Resize the scrollable range, e.g. after a re-layout
    pub fn set_max_offset(&mut self, max_offset: f32) {
        self.max_offset = max_offset.max(0.0);
        let target = self.clamp(self.spring.target());
        self.spring.set_target(target);
        if !self.running {
            let offset = self.clamp(self.spring.value());
            self.spring.snap_to(offset);
        }
    }

    /// Start (or retarget) an animated scroll; returns the clamped target
    pub fn scroll_to(&mut self, target: f32) -> f32 {
        let target = self.clamp(target);
        trace!(from = self.spring.value(), to = target, "scroll animation started");
        self.spring.set_target(target);
        self.running = true;
        target
    }

    /// Move the viewport directly (wheel, touch, keyboard), cancelling any animation
    pub fn jump_to(&mut self, offset: f32) -> f32 {
        let offset = self.clamp(offset);
        self.spring.snap_to(offset);
        self.running = false;
        offset
    }

    /// Advance by `dt` seconds; `None` when idle
    ///
    /// A step that is not a positive, finite duration leaves the animation
    /// untouched and also yields `None`.
    pub fn tick(&mut self, dt: f32) -> Option<ScrollFrame> {
        if !self.running {
            return None;
        }
        if !dt.is_finite() || dt <= 0.0 {
            trace!(dt, "ignoring invalid frame step");
            return None;
        }

        self.spring.step(dt);
        let settled = self.spring.is_settled();
        if settled {
            let target = self.spring.target();
            self.spring.snap_to(target);
            self.running = false;
        }

        Some(ScrollFrame {
            offset: self.clamp(self.spring.value()),
            settled,
        })
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_offset)
        } else {
            0.0
        }
    }
}
