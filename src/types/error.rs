//! Error types for the congraph library.

use thiserror::Error;

use super::value::AttrValue;

/// All errors that can occur in the congraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node id already present in the graph.
    #[error("Node {0} already exists")]
    DuplicateNode(i64),

    /// Unordered node pair already connected.
    #[error("Edge ({0}, {1}) already exists")]
    DuplicateEdge(i64, i64),

    /// Node id was never added.
    #[error("Node {0} not found")]
    NodeNotFound(i64),

    /// No stored edge connects the given node pair.
    #[error("No edge between {0} and {1}")]
    EdgeNotFound(i64, i64),

    /// Edge position past the end of the edge store.
    #[error("Edge position {0} out of range")]
    EdgePositionOutOfRange(usize),

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on node {0}")]
    SelfLoop(i64),

    /// Attribute key not declared in the schema for this entity kind.
    #[error("Attribute key {0:?} not declared in schema")]
    UnknownAttributeKey(String),

    /// Attribute value outside the key's declared domain.
    #[error("Value {value} not in domain of attribute {key:?}")]
    UnknownAttributeValue { key: String, value: AttrValue },

    /// Read of an attribute that was never set on this entity.
    #[error("Attribute {key:?} not set")]
    AttributeNotSet { key: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("Document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for congraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
