//! Attribute schema — the external declaration of permitted keys and values.
//!
//! A [`GraphSchema`] declares, independently for nodes and edges, which
//! attribute keys exist and the ordered domain of values each key admits.
//! Graphs borrow the schema for their entire lifetime and never mutate it;
//! the borrow makes concurrent schema mutation impossible while any graph
//! using it is live.

use std::collections::HashMap;

use crate::types::{AttrValue, GraphError, GraphResult};

/// Which entity kind an attribute table applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Node attributes.
    Node,
    /// Edge attributes.
    Edge,
}

impl EntityKind {
    /// Return a human-readable name for this entity kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Attribute declarations for one entity kind.
///
/// Key positions are declaration indices: the first declared key is
/// position 0, the second position 1, and so on. Positions stay stable
/// because the table is immutable after [`SchemaBuilder::build`].
#[derive(Debug, Default, Clone)]
struct AttrTable {
    /// Keys in declaration order; index == key position.
    keys: Vec<String>,
    /// Ordered value domains, parallel to `keys`.
    domains: Vec<Vec<AttrValue>>,
    /// key -> position lookup.
    positions: HashMap<String, usize>,
}

impl AttrTable {
    fn declare(&mut self, key: String, domain: Vec<AttrValue>) {
        match self.positions.get(&key) {
            // Re-declaring a key replaces its domain but keeps its position.
            Some(&pos) => self.domains[pos] = domain,
            None => {
                self.positions.insert(key.clone(), self.keys.len());
                self.keys.push(key);
                self.domains.push(domain);
            }
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }
}

/// Immutable attribute schema shared by one or more graphs.
#[derive(Debug, Default, Clone)]
pub struct GraphSchema {
    node: AttrTable,
    edge: AttrTable,
}

impl GraphSchema {
    /// Start building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    fn table(&self, kind: EntityKind) -> &AttrTable {
        match kind {
            EntityKind::Node => &self.node,
            EntityKind::Edge => &self.edge,
        }
    }

    /// The ordered value domain declared for `key`.
    pub fn domain(&self, kind: EntityKind, key: &str) -> GraphResult<&[AttrValue]> {
        let table = self.table(kind);
        match table.position(key) {
            Some(pos) => Ok(&table.domains[pos]),
            None => Err(GraphError::UnknownAttributeKey(key.to_owned())),
        }
    }

    /// The stable integer position assigned to `key`.
    pub fn key_position(&self, kind: EntityKind, key: &str) -> GraphResult<usize> {
        self.table(kind)
            .position(key)
            .ok_or_else(|| GraphError::UnknownAttributeKey(key.to_owned()))
    }

    /// Find `value` in `key`'s domain by equality search.
    pub fn value_index(&self, kind: EntityKind, key: &str, value: &AttrValue) -> GraphResult<usize> {
        self.domain(kind, key)?
            .iter()
            .position(|v| v == value)
            .ok_or_else(|| GraphError::UnknownAttributeValue {
                key: key.to_owned(),
                value: value.clone(),
            })
    }

    /// Keys declared for this entity kind, in position order.
    pub fn keys(&self, kind: EntityKind) -> impl Iterator<Item = &str> {
        self.table(kind).keys.iter().map(String::as_str)
    }

    /// Number of keys declared for this entity kind.
    pub fn key_count(&self, kind: EntityKind) -> usize {
        self.table(kind).keys.len()
    }
}

/// Builder for [`GraphSchema`] instances.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    node: AttrTable,
    edge: AttrTable,
}

impl SchemaBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node attribute key with its ordered value domain.
    pub fn node_attr(mut self, key: impl Into<String>, domain: Vec<AttrValue>) -> Self {
        self.node.declare(key.into(), domain);
        self
    }

    /// Declare an edge attribute key with its ordered value domain.
    pub fn edge_attr(mut self, key: impl Into<String>, domain: Vec<AttrValue>) -> Self {
        self.edge.declare(key.into(), domain);
        self
    }

    /// Finish building; the schema is immutable from here on.
    pub fn build(self) -> GraphSchema {
        GraphSchema {
            node: self.node,
            edge: self.edge,
        }
    }
}
