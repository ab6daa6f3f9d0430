//! Folio Core
//!
//! The navigation model behind a single-page portfolio:
//!
//! - **Section Registry**: the ordered list of page sections and their anchors
//! - **Scroll Sampler**: maps a viewport scroll offset to the active section
//! - **Navigation Dispatcher**: jump-to-section commands with a suppression lock
//! - **Navigation State**: active section, menu and theme flags, observed by renderers
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Bounds, CoordinatorConfig, NoopHost, ScrollCoordinator, SectionRegistry};
//!
//! let registry = SectionRegistry::builder()
//!     .section("hero", Bounds::vertical(0.0, 800.0))
//!     .section("about", Bounds::vertical(800.0, 600.0))
//!     .build()
//!     .unwrap();
//!
//! let mut nav = ScrollCoordinator::new(registry, CoordinatorConfig::default(), NoopHost).unwrap();
//! assert_eq!(nav.state().active_section(), "hero");
//!
//! nav.on_scroll(750.0);
//! assert_eq!(nav.state().active_section(), "about");
//! ```

pub mod bounds;
pub mod config;
pub mod coordinator;
pub mod dispatcher;
pub mod error;
pub mod sampler;
pub mod section;
pub mod state;

pub use bounds::Bounds;
pub use config::CoordinatorConfig;
pub use coordinator::{ScrollCoordinator, ScrollOutcome};
pub use dispatcher::{host_fn, FnHost, NavigationDispatcher, NoopHost, ScrollHost, ScrollRequest};
pub use error::{NavigationError, Result};
pub use sampler::{ScrollSampler, OFFSET_BIAS};
pub use section::{SectionAnchor, SectionId, SectionRegistry, SectionRegistryBuilder, SharedAnchor};
pub use state::{NavigationState, SubscriptionId};
