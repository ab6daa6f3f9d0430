//! Error types for folio_core

use thiserror::Error;

use crate::section::SectionId;

/// Errors raised by the section registry and the navigation dispatcher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Navigation was requested to an id absent from the registry
    #[error("section not found: {0}")]
    SectionNotFound(SectionId),

    /// The same section id was registered twice
    #[error("duplicate section id: {0}")]
    DuplicateSection(SectionId),

    /// A coordinator needs at least one section to start from
    #[error("section registry is empty")]
    EmptyRegistry,
}

/// Result type for folio_core operations
pub type Result<T> = std::result::Result<T, NavigationError>;
