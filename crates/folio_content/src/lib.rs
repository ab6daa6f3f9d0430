//! Folio Content
//!
//! The data a portfolio page renders, loaded from TOML:
//!
//! - **Portfolio**: personal details, nav items, skills, experience, projects,
//!   education, certificates and social links
//! - **Sections**: the nav list defines which sections exist and their order
//! - **Contact**: the contact form and the `mailto:` link it produces
//!
//! ```rust
//! use folio_content::Portfolio;
//!
//! let portfolio = Portfolio::builtin().unwrap();
//! assert_eq!(portfolio.section_ids()[0], "home");
//! assert!(portfolio.skills_in(Some("NVIDIA Tools")).len() > 0);
//! ```

pub mod contact;
pub mod error;
pub mod model;
pub mod portfolio;

pub use contact::{is_valid_email, percent_encode, ContactForm};
pub use error::{ContentError, Result};
pub use model::{
    Certificate, Education, Experience, Language, NavItem, PersonalInfo, Project, SectionKind,
    Skill, SocialLink,
};
pub use portfolio::{Portfolio, SectionEntry};
