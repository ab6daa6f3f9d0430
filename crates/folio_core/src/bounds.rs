//! Element geometry as reported by the host layout

use serde::{Deserialize, Serialize};

/// Absolute bounds of a rendered element, in page coordinates
///
/// `y` grows downwards from the top of the page, so a section's vertical
/// extent is `[y, y + height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// X position (absolute, after layout)
    pub x: f32,
    /// Y position (absolute, after layout)
    pub y: f32,
    /// Computed width
    pub width: f32,
    /// Computed height
    pub height: f32,
}

impl Bounds {
    /// Create new bounds
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-width bounds described only by their vertical extent
    pub fn vertical(top: f32, height: f32) -> Self {
        Self::new(0.0, top, 0.0, height)
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether `y` falls inside `[top, bottom)`
    ///
    /// Zero or negative heights never contain anything.
    pub fn contains_y(&self, y: f32) -> bool {
        self.height > 0.0 && y >= self.top() && y < self.bottom()
    }

    /// Check if a point is inside the bounds
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && self.contains_y(py)
    }
}
