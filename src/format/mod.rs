//! Serialization — JSON graph documents.

pub mod document;

pub use document::{AttrDecl, EdgeEntry, GraphDocument, NodeEntry, SchemaDocument};
