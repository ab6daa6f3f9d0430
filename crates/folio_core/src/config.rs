//! Coordinator configuration

use serde::{Deserialize, Serialize};

use crate::sampler::OFFSET_BIAS;

/// Tuning knobs for [`crate::ScrollCoordinator`]
///
/// Every field has a default, so a partial `[coordinator]` table is valid.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Lookahead added to the scroll offset before sampling (sticky header height)
    pub offset_bias: f32,
    /// Raw scroll offset past which the header switches to its compact style
    pub header_condense_threshold: f32,
    /// Hold sampled updates while a navigation scroll is in flight
    pub suppress_during_navigation: bool,
    /// Upper bound on samples discarded by one navigation lock
    pub max_suppressed_samples: u32,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            offset_bias: OFFSET_BIAS,
            header_condense_threshold: 50.0,
            suppress_during_navigation: true,
            max_suppressed_samples: 240,
        }
    }
}

impl CoordinatorConfig {
    /// Sampler output is applied even while a navigation scroll runs
    pub fn without_suppression() -> Self {
        Self {
            suppress_during_navigation: false,
            ..Default::default()
        }
    }
}
