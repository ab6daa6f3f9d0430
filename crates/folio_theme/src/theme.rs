//! Theme selection
//!
//! A [`Theme`] is a color scheme plus the resolved tokens for it, with any
//! site-level brand overrides applied on top.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::tokens::ColorTokens;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub fn toggle(&self) -> Self {
        Self::from_dark_flag(!self.is_dark())
    }
}

/// Brand colors a site may replace, applied to both schemes
///
/// Read from the `[theme]` table of the site configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub accent: Option<Color>,
    pub highlight: Option<Color>,
}

impl ThemeOverrides {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.secondary.is_none()
            && self.accent.is_none()
            && self.highlight.is_none()
    }

    /// Replace brand tokens; light/dark shades are derived from the base
    fn apply(&self, scheme: ColorScheme, colors: &mut ColorTokens) {
        // Dark surfaces need lighter brand tones to keep contrast
        let lift = |c: Color| {
            if scheme.is_dark() {
                c.mix(Color::WHITE, 0.15)
            } else {
                c
            }
        };

        if let Some(primary) = self.primary {
            let base = lift(primary);
            colors.primary = base;
            colors.primary_light = base.mix(Color::WHITE, 0.15);
            colors.primary_dark = base.mix(Color::BLACK, 0.3);
        }
        if let Some(secondary) = self.secondary {
            let base = lift(secondary);
            colors.secondary = base;
            colors.secondary_light = base.mix(Color::WHITE, 0.15);
            colors.secondary_dark = base.mix(Color::BLACK, 0.3);
        }
        if let Some(accent) = self.accent {
            let base = lift(accent);
            colors.accent = base;
            colors.accent_light = base.mix(Color::WHITE, 0.15);
            colors.accent_dark = base.mix(Color::BLACK, 0.3);
        }
        if let Some(highlight) = self.highlight {
            colors.highlight = lift(highlight);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    scheme: ColorScheme,
    colors: ColorTokens,
}

impl Theme {
    pub fn new(scheme: ColorScheme) -> Self {
        let colors = match scheme {
            ColorScheme::Light => ColorTokens::light(),
            ColorScheme::Dark => ColorTokens::dark(),
        };
        Self { scheme, colors }
    }

    pub fn with_overrides(scheme: ColorScheme, overrides: &ThemeOverrides) -> Self {
        let mut theme = Self::new(scheme);
        if !overrides.is_empty() {
            debug!(?scheme, "applying theme overrides");
            overrides.apply(scheme, &mut theme.colors);
        }
        theme
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}
