//! Serialization collaborators for the Options container.
//!
//! - [`json`]: JSON encoding/decoding with formatting flags.
//! - [`xml`]: ordered-value to XML conversion with singularised item tags.

pub mod json;
pub mod xml;

pub use json::{EncodeFlags, decode, encode, is_json};
pub use xml::to_xml;
