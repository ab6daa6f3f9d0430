//! Color tokens
//!
//! Brand colors come from the site's design tokens (a deep navy primary, a
//! slate secondary and a gray accent, each with light/dark shades). The dark
//! palette keeps the brand hues but swaps surfaces and text.

use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub secondary: Color,
    pub secondary_light: Color,
    pub secondary_dark: Color,
    pub accent: Color,
    pub accent_light: Color,
    pub accent_dark: Color,
    /// Highlight for links and the active nav item
    pub highlight: Color,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub surface_alt: Color,
    /// Header background once the page is scrolled
    pub header_condensed: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,

    pub border: Color,
}

impl ColorTokens {
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0x1a365d),
            primary_light: Color::from_hex(0x2b4c7e),
            primary_dark: Color::from_hex(0x0f2442),
            secondary: Color::from_hex(0x2d3748),
            secondary_light: Color::from_hex(0x4a5568),
            secondary_dark: Color::from_hex(0x1a202c),
            accent: Color::from_hex(0x4a5568),
            accent_light: Color::from_hex(0x718096),
            accent_dark: Color::from_hex(0x2d3748),
            // Teal
            highlight: Color::from_hex(0x0d9488),

            background: Color::WHITE,
            surface: Color::WHITE,
            surface_alt: Color::from_hex(0xf9fafb),
            header_condensed: Color::WHITE,

            text_primary: Color::from_hex(0x111827),
            text_secondary: Color::from_hex(0x374151),
            text_inverse: Color::WHITE,

            border: Color::from_hex(0xd1d5db),
        }
    }

    pub fn dark() -> Self {
        Self {
            // Lift the navy so it reads on dark surfaces
            primary: Color::from_hex(0x2b4c7e),
            primary_light: Color::from_hex(0x3d6199),
            primary_dark: Color::from_hex(0x1a365d),
            secondary: Color::from_hex(0x4a5568),
            secondary_light: Color::from_hex(0x718096),
            secondary_dark: Color::from_hex(0x2d3748),
            accent: Color::from_hex(0x718096),
            accent_light: Color::from_hex(0xa0aec0),
            accent_dark: Color::from_hex(0x4a5568),
            highlight: Color::from_hex(0x2dd4bf),

            background: Color::from_hex(0x0f172a),
            surface: Color::from_hex(0x1a202c),
            surface_alt: Color::from_hex(0x111827),
            header_condensed: Color::from_hex(0x1a202c),

            text_primary: Color::from_hex(0xf9fafb),
            text_secondary: Color::from_hex(0xd1d5db),
            text_inverse: Color::from_hex(0x111827),

            border: Color::from_hex(0x374151),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}
