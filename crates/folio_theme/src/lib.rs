//! Folio Theme
//!
//! Design tokens for the portfolio page. The navigation state only carries a
//! dark-mode flag; this crate turns that flag into the palette the renderer
//! paints with.
//!
//! ```rust
//! use folio_theme::{ColorScheme, Theme};
//!
//! let theme = Theme::new(ColorScheme::from_dark_flag(true));
//! assert_eq!(theme.scheme(), ColorScheme::Dark);
//! assert_eq!(theme.colors().primary.to_hex(), "#2b4c7e");
//! ```

pub mod color;
pub mod theme;
pub mod tokens;

pub use color::{Color, ColorParseError};
pub use theme::{ColorScheme, Theme, ThemeOverrides};
pub use tokens::ColorTokens;
