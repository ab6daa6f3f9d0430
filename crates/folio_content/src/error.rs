//! Error types for folio_content

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    /// Failed to read a content file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid TOML for the portfolio schema
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required field was left empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// A nav item points at something that is not a page section
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("duplicate section: {0}")]
    DuplicateSection(String),

    /// Nav hrefs must be in-page anchors (`#id`)
    #[error("nav href must be an in-page anchor: {0}")]
    InvalidHref(String),

    #[error("skill {skill} has proficiency {value}, expected 0-100")]
    InvalidProficiency { skill: String, value: u8 },
}

/// Result type for folio_content operations
pub type Result<T> = std::result::Result<T, ContentError>;
