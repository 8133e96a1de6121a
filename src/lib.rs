//! congraph — append-only undirected graphs with schema-constrained
//! attributes.
//!
//! Nodes and edges carry integer identifiers and live in dense positional
//! storage; attributes are a sparse overlay validated against an external
//! [`GraphSchema`]. Bridge (cut-edge) detection runs in O(V+E) via DFS
//! low-link timestamps.

pub mod cli;
pub mod format;
pub mod graph;
pub mod schema;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{AttrDecl, EdgeEntry, GraphDocument, NodeEntry, SchemaDocument};
pub use graph::{
    AttributeStore, EdgeStore, EdgeView, Edges, Graph, NodeStore, NodeView, Nodes,
};
pub use schema::{EntityKind, GraphSchema, SchemaBuilder};
pub use types::{AttrValue, GraphError, GraphResult};
