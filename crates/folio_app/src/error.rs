//! Error types for folio_app

use folio_content::{ContentError, SectionKind};
use folio_core::NavigationError;
use thiserror::Error;

/// Errors raised while building or driving a portfolio page
#[derive(Error, Debug)]
pub enum AppError {
    /// Navigation to a section failed
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Content was missing or invalid
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The page has no section of the kind an action needs
    #[error("page has no {0:?} section")]
    MissingSection(SectionKind),

    /// A category filter names a category no item belongs to
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A layout metric cannot be laid out with
    #[error("invalid layout setting {field} = {value}")]
    InvalidLayout { field: &'static str, value: String },
}

/// Result type for folio_app operations
pub type Result<T> = std::result::Result<T, AppError>;
