//!
//! Optkit: an ordered, recursive key/value options container for layered
//! configuration, with a small set of supporting conversion utilities.
//!
//! ## Core Concepts
//!
//! * **Options (`options::Options`)**: The central container. An ordered map from
//!   string-or-integer keys to values, where any nested map is itself an `Options`
//!   node. Supports one-way locking, a four-way merge family (`merge`, `modify`,
//!   `complete`, `defaults`), cursor-style iteration, and derived views
//!   (`sort`, `unique`, `group_by`).
//! * **Values (`options::Value`)**: The tagged value union: null, scalars, or a
//!   nested `Options` node. Nested maps are always wrapped at construction and
//!   insertion time, never stored raw.
//! * **Casing (`casing`)**: Capitalisation detection and case conversion. The
//!   container uses it to alias `camelCase`/`PascalCase` lookups to kebab-case
//!   storage keys.
//! * **Conversion (`convert`)**: JSON encoding with formatting flags, and an
//!   ordered-value to XML writer.

pub mod casing;
pub mod convert;
pub mod options;

/// Re-export the `Options` struct for easier access.
pub use options::Options;

/// Result type used throughout the optkit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the optkit library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structured container errors from the options module
    #[error(transparent)]
    Options(options::OptionsError),

    /// Structured case-conversion errors from the casing module
    #[error(transparent)]
    Case(casing::CaseError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Options(_) => "options",
            Error::Case(_) => "casing",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Xml(_) => "xml",
        }
    }

    /// Check if this error is a rejected mutation of a locked container.
    pub fn is_read_only(&self) -> bool {
        match self {
            Error::Options(err) => err.is_read_only(),
            _ => false,
        }
    }

    /// Check if this error indicates a value of an unexpected type.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Options(err) => err.is_type_error(),
            _ => false,
        }
    }
}
