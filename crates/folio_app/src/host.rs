//! Smooth scroll host
//!
//! Realises the coordinator's scroll command with a spring-driven viewport.
//! The page ticks it once per frame and feeds the resulting offsets back to
//! the coordinator as ordinary scroll samples.

use folio_animation::{ScrollAnimation, ScrollFrame, SpringConfig};
use folio_core::{ScrollHost, ScrollRequest};
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct SmoothScrollHost {
    animation: ScrollAnimation,
    requests: u32,
}

impl SmoothScrollHost {
    pub fn new(spring: SpringConfig, max_offset: f32) -> Self {
        Self {
            animation: ScrollAnimation::new(spring, max_offset),
            requests: 0,
        }
    }

    /// Current viewport offset
    pub fn offset(&self) -> f32 {
        self.animation.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn target(&self) -> f32 {
        self.animation.target()
    }

    /// Number of scroll commands received
    pub fn requests(&self) -> u32 {
        self.requests
    }

    pub fn tick(&mut self, dt: f32) -> Option<ScrollFrame> {
        self.animation.tick(dt)
    }

    /// User-driven scroll; cancels a running animation
    pub fn jump_to(&mut self, offset: f32) -> f32 {
        self.animation.jump_to(offset)
    }

    pub fn set_max_offset(&mut self, max_offset: f32) {
        self.animation.set_max_offset(max_offset);
    }
}

impl ScrollHost for SmoothScrollHost {
    fn scroll_to(&mut self, request: ScrollRequest<'_>) {
        self.requests += 1;
        match request.target_offset {
            Some(offset) => {
                let target = self.animation.scroll_to(offset);
                debug!(section = %request.section, target, "smooth scroll");
            }
            None => warn!(section = %request.section, "scroll target has no layout"),
        }
    }
}
