#![forbid(unsafe_code)]

mod catalog;
mod dto;
mod error;
mod mapping;
mod source;

pub use catalog::{ContentCatalog, DisplaySettings};
pub use error::ContentError;
pub use source::{
    BuiltinSource, ContentSource, InMemorySource, YamlFileSource, parse_catalog, resolve_source,
};
