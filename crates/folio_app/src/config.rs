//! Page configuration

use folio_animation::SpringConfig;
use folio_core::CoordinatorConfig;
use folio_theme::ThemeOverrides;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Metrics the page layout is estimated from
///
/// Heights are in logical pixels. Text blocks are measured by wrapping at
/// `chars_per_line` characters with `line_height` per line.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub viewport_height: f32,
    /// Vertical padding of every section, top and bottom combined
    pub section_padding: f32,
    /// Section title and subtitle block
    pub heading_height: f32,
    pub line_height: f32,
    pub chars_per_line: usize,

    /// Profile card and highlights of the about section
    pub about_height: f32,
    /// Category filter buttons above the skill grid
    pub filter_bar_height: f32,
    pub skill_columns: usize,
    pub skill_row_height: f32,
    /// Card title, meta line and padding, excluding body text
    pub card_chrome: f32,
    pub card_spacing: f32,
    /// Technology tags under a project card
    pub tag_row_height: f32,
    pub contact_height: f32,
    pub footer_height: f32,

    /// Offset past which the scroll-to-top button shows
    pub scroll_to_top_threshold: f32,
    /// Spring driving animated section scrolls
    pub scroll_spring: SpringConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_height: 800.0,
            section_padding: 160.0,
            heading_height: 120.0,
            line_height: 24.0,
            chars_per_line: 90,
            about_height: 480.0,
            filter_bar_height: 56.0,
            skill_columns: 3,
            skill_row_height: 64.0,
            card_chrome: 96.0,
            card_spacing: 32.0,
            tag_row_height: 40.0,
            contact_height: 560.0,
            footer_height: 120.0,
            scroll_to_top_threshold: 300.0,
            scroll_spring: SpringConfig::smooth_scroll(),
        }
    }
}

impl LayoutConfig {
    /// Height of a wrapped text block
    pub fn text_height(&self, text: &str) -> f32 {
        let chars = text.chars().count();
        if chars == 0 {
            return 0.0;
        }
        let lines = chars.div_ceil(self.chars_per_line.max(1));
        lines as f32 * self.line_height
    }

    /// Reject metrics the layout cannot place sections with
    ///
    /// The viewport must have a positive height, every other length must be
    /// finite and non-negative, and the wrapping and grid counts at least one.
    pub fn validate(&self) -> Result<()> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(invalid("viewport_height", self.viewport_height));
        }

        let lengths = [
            ("section_padding", self.section_padding),
            ("heading_height", self.heading_height),
            ("line_height", self.line_height),
            ("about_height", self.about_height),
            ("filter_bar_height", self.filter_bar_height),
            ("skill_row_height", self.skill_row_height),
            ("card_chrome", self.card_chrome),
            ("card_spacing", self.card_spacing),
            ("tag_row_height", self.tag_row_height),
            ("contact_height", self.contact_height),
            ("footer_height", self.footer_height),
            ("scroll_to_top_threshold", self.scroll_to_top_threshold),
        ];
        if let Some((field, value)) = lengths
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(invalid(field, value));
        }

        if self.chars_per_line == 0 {
            return Err(invalid("chars_per_line", 0));
        }
        if self.skill_columns == 0 {
            return Err(invalid("skill_columns", 0));
        }

        let spring = &self.scroll_spring;
        if !spring.stiffness.is_finite() || spring.stiffness <= 0.0 {
            return Err(invalid("scroll_spring.stiffness", spring.stiffness));
        }
        if !spring.damping.is_finite() || spring.damping < 0.0 {
            return Err(invalid("scroll_spring.damping", spring.damping));
        }
        if !spring.mass.is_finite() || spring.mass <= 0.0 {
            return Err(invalid("scroll_spring.mass", spring.mass));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: impl ToString) -> AppError {
    AppError::InvalidLayout {
        field,
        value: value.to_string(),
    }
}

/// Everything a [`crate::PortfolioPage`] is configured with
///
/// Mirrors the `[coordinator]`, `[layout]` and `[theme]` tables of a site
/// configuration file; each table is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    pub coordinator: CoordinatorConfig,
    pub layout: LayoutConfig,
    pub theme: ThemeOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_height_wraps() {
        let config = LayoutConfig {
            chars_per_line: 10,
            line_height: 20.0,
            ..Default::default()
        };
        assert_eq!(config.text_height(""), 0.0);
        assert_eq!(config.text_height("short"), 20.0);
        assert_eq!(config.text_height("exactly 10"), 20.0);
        assert_eq!(config.text_height("eleven char"), 40.0);
    }

    #[test]
    fn test_text_height_huge_line_width() {
        let config = LayoutConfig {
            chars_per_line: usize::MAX,
            ..Default::default()
        };
        assert_eq!(config.text_height("one line"), config.line_height);
    }

    #[test]
    fn test_default_layout_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let nan_viewport = LayoutConfig {
            viewport_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_viewport.validate(),
            Err(AppError::InvalidLayout { field: "viewport_height", .. })
        ));

        let zero_viewport = LayoutConfig {
            viewport_height: 0.0,
            ..Default::default()
        };
        assert!(zero_viewport.validate().is_err());

        let negative_padding = LayoutConfig {
            section_padding: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative_padding.validate(),
            Err(AppError::InvalidLayout { field: "section_padding", .. })
        ));

        let no_columns = LayoutConfig {
            skill_columns: 0,
            ..Default::default()
        };
        assert!(matches!(
            no_columns.validate(),
            Err(AppError::InvalidLayout { field: "skill_columns", .. })
        ));

        let no_wrap = LayoutConfig {
            chars_per_line: 0,
            ..Default::default()
        };
        assert!(no_wrap.validate().is_err());

        let weightless = LayoutConfig {
            scroll_spring: SpringConfig::new(170.0, 26.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            weightless.validate(),
            Err(AppError::InvalidLayout { field: "scroll_spring.mass", .. })
        ));
    }

    #[test]
    fn test_page_config_tables_optional() {
        let config: PageConfig = toml::from_str(
            r##"
            [layout]
            viewport_height = 900.0

            [theme]
            primary = "#7c3aed"
            "##,
        )
        .unwrap();
        assert_eq!(config.layout.viewport_height, 900.0);
        assert_eq!(config.layout.section_padding, 160.0);
        assert_eq!(config.coordinator, CoordinatorConfig::default());
        assert!(config.theme.primary.is_some());
    }

    #[test]
    fn test_spring_table() {
        let config: LayoutConfig = toml::from_str(
            r#"
            [scroll_spring]
            stiffness = 300.0
            damping = 40.0
            mass = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll_spring, SpringConfig::new(300.0, 40.0, 1.0));
    }
}
