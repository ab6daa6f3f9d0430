//! Folio App
//!
//! The single-page portfolio, parameterised by one content dataset and one
//! configuration:
//!
//! - **Layout**: estimates each section's extent from its content
//! - **Smooth scrolling**: section jumps run on a critically damped spring
//! - **Events**: scroll, navigation, theme, menu, frames, resize, skill filter
//!   and contact form events drive the page
//! - **View**: a serializable snapshot a renderer paints from
//!
//! # Example
//!
//! ```rust
//! use folio_app::{PageConfig, PageEvent, PortfolioPage};
//! use folio_content::Portfolio;
//!
//! let portfolio = Portfolio::builtin().unwrap();
//! let mut page = PortfolioPage::new(portfolio, PageConfig::default()).unwrap();
//!
//! page.handle(PageEvent::Navigate { section: "skills".into() }).unwrap();
//! page.handle(PageEvent::Settle).unwrap();
//! assert_eq!(page.view().active_section, "skills");
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod layout;
pub mod page;
pub mod view;


pub use config::{LayoutConfig, PageConfig};
pub use error::{AppError, Result};
pub use events::{PageEffect, PageEvent};
pub use host::SmoothScrollHost;
pub use layout::{estimate_height, ContentFilters, PageLayout, SectionSlot};
pub use page::{PortfolioPage, SETTLE_DT};
pub use view::{NavLinkView, PageView};
